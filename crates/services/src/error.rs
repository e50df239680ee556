//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::ScoringError;
use quiz_core::model::{CategoryCode, Track};
use storage::repository::StorageError;
use storage::schema::BankTable;

/// Errors raised while loading and validating the question bank.
///
/// All of them are fatal: the bank is checked once at startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error(transparent)]
    DataSource(#[from] StorageError),

    #[error("table `{table}` row {row}: column `{column}` is blank")]
    MalformedRow {
        table: BankTable,
        row: usize,
        column: &'static str,
    },

    #[error("table `{table}` row {row}: {source}")]
    InvalidRow {
        table: BankTable,
        row: usize,
        #[source]
        source: quiz_core::Error,
    },

    #[error("table `{table}` has no rows")]
    EmptyTable { table: BankTable },

    #[error("type `{code}` is used by the ideal-state questions but has no improvement row")]
    UnknownCategory { code: CategoryCode },

    #[error("type `{code}` appears twice in `improvement` (rows {first_row} and {row})")]
    DuplicateCategory {
        code: CategoryCode,
        first_row: usize,
        row: usize,
    },
}

/// Errors emitted by `QuizSession::apply`. The session is left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("please enter your name")]
    EmptyName,

    #[error("`{event}` is not accepted on the {page} page")]
    InvalidTransition {
        page: &'static str,
        event: &'static str,
    },

    #[error("{track} question {index} does not exist")]
    MissingQuestion { track: Track, index: usize },

    #[error("page {page} is outside the quiz")]
    PageOutOfRange { page: usize },
}

/// Errors emitted while building a page for display.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RenderError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("no improvement row for type `{code}`")]
    UnknownCategory { code: CategoryCode },

    #[error("{track} question {index} does not exist")]
    MissingQuestion { track: Track, index: usize },

    #[error("page {page} is outside the quiz")]
    PageOutOfRange { page: usize },
}
