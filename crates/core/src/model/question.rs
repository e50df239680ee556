use std::fmt;

use thiserror::Error;

use crate::model::ids::{CategoryCode, OptionSlot};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("option {slot} text cannot be empty")]
    EmptyOptionText { slot: OptionSlot },

    #[error("option {slot} has no category code")]
    EmptyCategory { slot: OptionSlot },

    #[error("question set for the {track} track has no questions")]
    EmptySet { track: Track },
}

//
// ─── TRACK ─────────────────────────────────────────────────────────────────────
//

/// The two independent question sequences of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// "What I am like now."
    Current,
    /// "What I want to become."
    Ideal,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Current, Track::Ideal];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Track::Current => "current",
            Track::Ideal => "ideal",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A selectable answer and the category it scores for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    text: String,
    category: CategoryCode,
}

impl QuestionOption {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyOptionText` if the trimmed text is empty.
    pub fn new(
        slot: OptionSlot,
        text: impl Into<String>,
        category: CategoryCode,
    ) -> Result<Self, QuestionError> {
        let text = text.into().trim().to_owned();
        if text.is_empty() {
            return Err(QuestionError::EmptyOptionText { slot });
        }
        Ok(Self { text, category })
    }

    /// Build an option from raw cell text, validating the text before the code.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyOptionText` or `QuestionError::EmptyCategory`
    /// for blank cells.
    pub fn from_cells(slot: OptionSlot, text: &str, category: &str) -> Result<Self, QuestionError> {
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyOptionText { slot });
        }
        let category =
            CategoryCode::new(category).map_err(|_| QuestionError::EmptyCategory { slot })?;
        Self::new(slot, text, category)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn category(&self) -> &CategoryCode {
        &self.category
    }
}

/// A question with exactly five options, one per `OptionSlot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: [QuestionOption; 5],
}

impl Question {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the trimmed question text is empty.
    pub fn new(text: impl Into<String>, options: [QuestionOption; 5]) -> Result<Self, QuestionError> {
        let text = text.into().trim().to_owned();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }
        Ok(Self { text, options })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[QuestionOption; 5] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, slot: OptionSlot) -> &QuestionOption {
        &self.options[slot.index()]
    }

    /// Iterates options together with their slot.
    pub fn slotted_options(&self) -> impl Iterator<Item = (OptionSlot, &QuestionOption)> {
        OptionSlot::ALL.into_iter().zip(self.options.iter())
    }
}

//
// ─── QUESTION SET ──────────────────────────────────────────────────────────────
//

/// Ordered, non-empty list of questions for one track.
///
/// The order is the page order and never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    track: Track,
    questions: Vec<Question>,
}

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptySet` when `questions` is empty.
    pub fn new(track: Track, questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::EmptySet { track });
        }
        Ok(Self { track, questions })
    }

    #[must_use]
    pub fn track(&self) -> Track {
        self.track
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed set; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Distinct category codes in first-appearance order.
    #[must_use]
    pub fn category_codes(&self) -> Vec<&CategoryCode> {
        let mut seen: Vec<&CategoryCode> = Vec::new();
        for option in self.questions.iter().flat_map(|q| q.options.iter()) {
            if !seen.contains(&option.category()) {
                seen.push(option.category());
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> CategoryCode {
        CategoryCode::new(raw).unwrap()
    }

    fn question(text: &str, codes: [&str; 5]) -> Question {
        let options = OptionSlot::ALL.map(|slot| {
            QuestionOption::new(slot, format!("{text} {slot}"), code(codes[slot.index()])).unwrap()
        });
        Question::new(text, options).unwrap()
    }

    #[test]
    fn option_rejects_blank_text() {
        let err = QuestionOption::new(OptionSlot::D, "  ", code("A")).unwrap_err();
        assert_eq!(err, QuestionError::EmptyOptionText { slot: OptionSlot::D });
    }

    #[test]
    fn option_from_cells_names_the_blank_cell() {
        assert_eq!(
            QuestionOption::from_cells(OptionSlot::B, "", "").unwrap_err(),
            QuestionError::EmptyOptionText { slot: OptionSlot::B }
        );
        assert_eq!(
            QuestionOption::from_cells(OptionSlot::E, "Run", " ").unwrap_err(),
            QuestionError::EmptyCategory { slot: OptionSlot::E }
        );
        let option = QuestionOption::from_cells(OptionSlot::A, " Walk ", " Natural ").unwrap();
        assert_eq!(option.text(), "Walk");
        assert_eq!(option.category().as_str(), "Natural");
    }

    #[test]
    fn question_exposes_options_by_slot() {
        let q = question("Weekend plans?", ["A", "B", "C", "D", "E"]);
        assert_eq!(q.option(OptionSlot::C).category().as_str(), "C");
        assert_eq!(q.slotted_options().count(), 5);
    }

    #[test]
    fn empty_set_is_rejected() {
        let err = QuestionSet::new(Track::Ideal, Vec::new()).unwrap_err();
        assert_eq!(err, QuestionError::EmptySet { track: Track::Ideal });
    }

    #[test]
    fn category_codes_are_distinct_in_first_seen_order() {
        let set = QuestionSet::new(
            Track::Current,
            vec![
                question("Q1", ["B", "A", "B", "C", "A"]),
                question("Q2", ["D", "A", "E", "C", "B"]),
            ],
        )
        .unwrap();
        let codes: Vec<&str> = set.category_codes().into_iter().map(CategoryCode::as_str).collect();
        assert_eq!(codes, vec!["B", "A", "C", "D", "E"]);
    }
}
