use thiserror::Error;

use crate::model::{CategoryCodeError, QuestionError, RecommendationError};
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    CategoryCode(#[from] CategoryCodeError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Recommendation(#[from] RecommendationError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
