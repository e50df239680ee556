use crate::model::question::Track;
use crate::model::tally::Tally;

//
// ─── PAGES ─────────────────────────────────────────────────────────────────────
//

/// A position in the linear quiz sequence.
///
/// Question indices are zero-based positions inside their question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Intro,
    CurrentQuestion { index: usize },
    Interstitial,
    IdealQuestion { index: usize },
    TypeResult,
    FixResult,
}

impl Page {
    /// Track and question index for question pages.
    #[must_use]
    pub const fn question(self) -> Option<(Track, usize)> {
        match self {
            Page::CurrentQuestion { index } => Some((Track::Current, index)),
            Page::IdealQuestion { index } => Some((Track::Ideal, index)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Page::Intro => "intro",
            Page::CurrentQuestion { .. } => "current-question",
            Page::Interstitial => "interstitial",
            Page::IdealQuestion { .. } => "ideal-question",
            Page::TypeResult => "type-result",
            Page::FixResult => "fix-result",
        }
    }
}

/// Maps page numbers to pages for a given pair of question-set sizes.
///
/// Page 0 is the intro, pages `1..=Nc` are current questions, `Nc + 1` is the
/// interstitial, `Nc + 2..=Nc + Ni + 1` are ideal questions, followed by the
/// type result and the fix result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    current_total: usize,
    ideal_total: usize,
}

impl PageLayout {
    #[must_use]
    pub const fn new(current_total: usize, ideal_total: usize) -> Self {
        Self {
            current_total,
            ideal_total,
        }
    }

    #[must_use]
    pub const fn current_total(self) -> usize {
        self.current_total
    }

    #[must_use]
    pub const fn ideal_total(self) -> usize {
        self.ideal_total
    }

    #[must_use]
    pub const fn total_for(self, track: Track) -> usize {
        match track {
            Track::Current => self.current_total,
            Track::Ideal => self.ideal_total,
        }
    }

    #[must_use]
    pub const fn interstitial_page(self) -> usize {
        self.current_total + 1
    }

    #[must_use]
    pub const fn type_result_page(self) -> usize {
        self.current_total + self.ideal_total + 2
    }

    #[must_use]
    pub const fn fix_result_page(self) -> usize {
        self.current_total + self.ideal_total + 3
    }

    /// Page number of the first page of a track's questions.
    #[must_use]
    pub const fn first_question_page(self, track: Track) -> usize {
        match track {
            Track::Current => 1,
            Track::Ideal => self.current_total + 2,
        }
    }

    /// Resolves a page number, `None` past the fix-result page.
    #[must_use]
    pub const fn page_at(self, page: usize) -> Option<Page> {
        let interstitial = self.interstitial_page();
        let ideal_first = self.first_question_page(Track::Ideal);
        if page == 0 {
            Some(Page::Intro)
        } else if page < interstitial {
            Some(Page::CurrentQuestion { index: page - 1 })
        } else if page == interstitial {
            Some(Page::Interstitial)
        } else if page < self.type_result_page() {
            Some(Page::IdealQuestion {
                index: page - ideal_first,
            })
        } else if page == self.type_result_page() {
            Some(Page::TypeResult)
        } else if page == self.fix_result_page() {
            Some(Page::FixResult)
        } else {
            None
        }
    }
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Mutable progress of one user's quiz run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    page: usize,
    name: String,
    current_tally: Tally,
    ideal_tally: Tally,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn current_tally(&self) -> &Tally {
        &self.current_tally
    }

    #[must_use]
    pub fn ideal_tally(&self) -> &Tally {
        &self.ideal_tally
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn tally_mut(&mut self, track: Track) -> &mut Tally {
        match track {
            Track::Current => &mut self.current_tally,
            Track::Ideal => &mut self.ideal_tally,
        }
    }

    /// Moves one page forward.
    pub fn advance(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Back to the intro with no name and empty tallies.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
