use thiserror::Error;

use crate::model::{CategoryCode, Tally};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("cannot resolve a category from an empty tally")]
    EmptyTally,
}

/// Outcome of picking the winning category of a tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub winner: CategoryCode,
    pub count: u32,
    /// Every code sharing the maximum count, in first-recorded order.
    /// Contains `winner` as its first element.
    pub tied: Vec<CategoryCode>,
}

impl Resolution {
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.tied.len() > 1
    }
}

/// Returns the category with the highest count.
///
/// Ties go to the code that was recorded first.
///
/// # Errors
///
/// Returns `ScoringError::EmptyTally` when nothing has been recorded.
pub fn resolve(tally: &Tally) -> Result<CategoryCode, ScoringError> {
    resolve_detailed(tally).map(|resolution| resolution.winner)
}

/// Like [`resolve`], but also reports the winning count and any tied codes.
///
/// # Errors
///
/// Returns `ScoringError::EmptyTally` when nothing has been recorded.
pub fn resolve_detailed(tally: &Tally) -> Result<Resolution, ScoringError> {
    let max = tally
        .iter()
        .map(|(_, count)| count)
        .max()
        .ok_or(ScoringError::EmptyTally)?;

    let tied: Vec<CategoryCode> = tally
        .iter()
        .filter(|(_, count)| *count == max)
        .map(|(code, _)| code.clone())
        .collect();
    let winner = tied.first().cloned().ok_or(ScoringError::EmptyTally)?;

    Ok(Resolution {
        winner,
        count: max,
        tied,
    })
}
