use async_trait::async_trait;
use quiz_core::model::{OptionSlot, Track};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::schema::BankTable;

/// Errors surfaced by question bank sources.
///
/// Every variant is fatal at startup: the bank is read once and never retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question bank not found: {0}")]
    MissingSource(String),

    #[error("table `{table}` not found")]
    MissingTable { table: BankTable },

    #[error("table `{table}` is missing column `{column}`")]
    MissingColumn {
        table: BankTable,
        column: &'static str,
    },

    #[error("unsupported question bank location: {0}")]
    UnsupportedLocation(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A raw question row as stored in the bank.
///
/// Fields stay optional here; the question builder decides what a usable row
/// looks like. `row` is the 1-based position of the row inside its table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionRecord {
    pub row: usize,
    pub question: Option<String>,
    pub options: [Option<String>; 5],
    pub types: [Option<String>; 5],
}

impl QuestionRecord {
    /// Build a fully populated record from `(option text, type)` pairs in slot order.
    #[must_use]
    pub fn complete(row: usize, question: &str, options: [(&str, &str); 5]) -> Self {
        Self {
            row,
            question: Some(question.to_owned()),
            options: options.map(|(text, _)| Some(text.to_owned())),
            types: options.map(|(_, code)| Some(code.to_owned())),
        }
    }

    #[must_use]
    pub fn option(&self, slot: OptionSlot) -> Option<&str> {
        self.options[slot.index()].as_deref()
    }

    #[must_use]
    pub fn option_type(&self, slot: OptionSlot) -> Option<&str> {
        self.types[slot.index()].as_deref()
    }
}

/// A raw improvement row (`type_name`, `core_kw`, `core_msg`, `direction_msg`, `action_1..3`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationRecord {
    pub row: usize,
    pub type_name: Option<String>,
    pub core_kw: Option<String>,
    pub core_msg: Option<String>,
    pub direction_msg: Option<String>,
    pub actions: [Option<String>; 3],
}

impl RecommendationRecord {
    #[must_use]
    pub fn complete(
        row: usize,
        type_name: &str,
        core_kw: &str,
        core_msg: &str,
        direction_msg: &str,
        actions: [&str; 3],
    ) -> Self {
        Self {
            row,
            type_name: Some(type_name.to_owned()),
            core_kw: Some(core_kw.to_owned()),
            core_msg: Some(core_msg.to_owned()),
            direction_msg: Some(direction_msg.to_owned()),
            actions: actions.map(|action| Some(action.to_owned())),
        }
    }
}

/// Read access to the three tables of a question bank.
#[async_trait]
pub trait QuestionBankSource: Send + Sync {
    /// Rows of the question table for `track`, in table order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the table or one of its required columns is
    /// missing, or the source cannot be read.
    async fn question_rows(&self, track: Track) -> Result<Vec<QuestionRecord>, StorageError>;

    /// Rows of the improvement table, in table order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the table or one of its required columns is
    /// missing, or the source cannot be read.
    async fn recommendation_rows(&self) -> Result<Vec<RecommendationRecord>, StorageError>;
}

/// Write access used to author or seed a question bank.
#[async_trait]
pub trait QuestionBankWriter: Send + Sync {
    /// Replace every row of the question table for `track`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the rows cannot be stored.
    async fn replace_question_rows(
        &self,
        track: Track,
        rows: &[QuestionRecord],
    ) -> Result<(), StorageError>;

    /// Replace every row of the improvement table.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the rows cannot be stored.
    async fn replace_recommendation_rows(
        &self,
        rows: &[RecommendationRecord],
    ) -> Result<(), StorageError>;
}

/// Simple in-memory bank for testing and prototyping.
///
/// Tables that were never written are reported as missing, like a workbook
/// without that sheet.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<HashMap<Track, Vec<QuestionRecord>>>>,
    recommendations: Arc<Mutex<Option<Vec<RecommendationRecord>>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            questions: Arc::new(Mutex::new(HashMap::new())),
            recommendations: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl QuestionBankSource for InMemoryRepository {
    async fn question_rows(&self, track: Track) -> Result<Vec<QuestionRecord>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .get(&track)
            .cloned()
            .ok_or(StorageError::MissingTable {
                table: BankTable::questions(track),
            })
    }

    async fn recommendation_rows(&self) -> Result<Vec<RecommendationRecord>, StorageError> {
        let guard = self
            .recommendations
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.clone().ok_or(StorageError::MissingTable {
            table: BankTable::Improvement,
        })
    }
}

#[async_trait]
impl QuestionBankWriter for InMemoryRepository {
    async fn replace_question_rows(
        &self,
        track: Track,
        rows: &[QuestionRecord],
    ) -> Result<(), StorageError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(track, rows.to_vec());
        Ok(())
    }

    async fn replace_recommendation_rows(
        &self,
        rows: &[RecommendationRecord],
    ) -> Result<(), StorageError> {
        let mut guard = self
            .recommendations
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(rows.to_vec());
        Ok(())
    }
}

/// Read and write handles to one question bank behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub source: Arc<dyn QuestionBankSource>,
    pub writer: Option<Arc<dyn QuestionBankWriter>>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let source: Arc<dyn QuestionBankSource> = Arc::new(repo.clone());
        let writer: Arc<dyn QuestionBankWriter> = Arc::new(repo);
        Self {
            source,
            writer: Some(writer),
        }
    }
}
