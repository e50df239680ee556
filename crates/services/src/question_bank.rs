use quiz_core::model::{
    CategoryCode, PageLayout, QuestionSet, Recommendation, RecommendationTable, Track,
};
use serde::Serialize;
use storage::repository::QuestionBankSource;

use crate::builder::{build_questions, build_recommendations};
use crate::error::{BankError, RenderError};

/// The validated, immutable reference data of the quiz.
///
/// Every category code offered by an ideal-state option is guaranteed to have
/// a recommendation, so `lookup` never fails for a resolved ideal type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    current: QuestionSet,
    ideal: QuestionSet,
    recommendations: RecommendationTable,
}

/// Counts and category codes of a loaded bank, printed by `app check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankSummary {
    pub current_questions: usize,
    pub ideal_questions: usize,
    pub current_types: Vec<String>,
    pub ideal_types: Vec<String>,
    pub recommendation_types: Vec<String>,
}

impl QuestionBank {
    /// Assemble a bank from already built parts.
    ///
    /// # Errors
    ///
    /// Returns `BankError::UnknownCategory` for the first ideal-state code
    /// without a recommendation.
    pub fn new(
        current: QuestionSet,
        ideal: QuestionSet,
        recommendations: RecommendationTable,
    ) -> Result<Self, BankError> {
        if let Some(code) = ideal
            .category_codes()
            .into_iter()
            .find(|code| !recommendations.contains(code))
        {
            return Err(BankError::UnknownCategory { code: code.clone() });
        }

        for code in current.category_codes() {
            if !recommendations.contains(code) {
                tracing::warn!(%code, "current-state type has no improvement row");
            }
        }

        Ok(Self {
            current,
            ideal,
            recommendations,
        })
    }

    /// Read the three tables from `source` and validate them.
    ///
    /// # Errors
    ///
    /// Returns `BankError` if a table cannot be read, a row is malformed, or
    /// an ideal-state code has no recommendation.
    pub async fn load(source: &dyn QuestionBankSource) -> Result<Self, BankError> {
        let current_rows = source.question_rows(Track::Current).await?;
        let ideal_rows = source.question_rows(Track::Ideal).await?;
        let improvement_rows = source.recommendation_rows().await?;

        let current = build_questions(Track::Current, &current_rows)?;
        let ideal = build_questions(Track::Ideal, &ideal_rows)?;
        let recommendations = build_recommendations(&improvement_rows)?;
        let bank = Self::new(current, ideal, recommendations)?;

        tracing::info!(
            current = bank.current.len(),
            ideal = bank.ideal.len(),
            types = bank.recommendations.len(),
            "question bank loaded"
        );
        Ok(bank)
    }

    #[must_use]
    pub fn questions(&self, track: Track) -> &QuestionSet {
        match track {
            Track::Current => &self.current,
            Track::Ideal => &self.ideal,
        }
    }

    #[must_use]
    pub fn layout(&self) -> PageLayout {
        PageLayout::new(self.current.len(), self.ideal.len())
    }

    /// Exact-match lookup of the recommendation for `code`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::UnknownCategory` if no row carries `code`.
    pub fn lookup(&self, code: &CategoryCode) -> Result<&Recommendation, RenderError> {
        self.recommendations
            .get(code)
            .ok_or_else(|| RenderError::UnknownCategory { code: code.clone() })
    }

    #[must_use]
    pub fn summary(&self) -> BankSummary {
        let codes = |set: &QuestionSet| {
            set.category_codes()
                .into_iter()
                .map(|code| code.as_str().to_owned())
                .collect()
        };
        BankSummary {
            current_questions: self.current.len(),
            ideal_questions: self.ideal.len(),
            current_types: codes(&self.current),
            ideal_types: codes(&self.ideal),
            recommendation_types: self
                .recommendations
                .iter()
                .map(|row| row.category().as_str().to_owned())
                .collect(),
        }
    }
}
