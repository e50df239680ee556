use std::sync::Arc;

use storage::location::BankLocation;
use storage::repository::{QuestionBankSource, Storage};

use crate::error::BankError;
use crate::question_bank::QuestionBank;
use crate::sessions::QuizSession;

/// App-facing handle to the loaded question bank.
///
/// The bank is read once and shared read-only; every quiz view gets its own
/// `QuizSession`.
#[derive(Clone)]
pub struct AppServices {
    bank: Arc<QuestionBank>,
}

impl AppServices {
    /// Open the bank at `location` and validate it.
    ///
    /// # Errors
    ///
    /// Returns `BankError` if the source is missing or unreadable, or if the
    /// bank fails validation.
    pub async fn open(location: &BankLocation) -> Result<Self, BankError> {
        let source = Storage::open(location).await?;
        Self::from_source(source.as_ref()).await
    }

    /// Load and validate the bank from any source.
    ///
    /// # Errors
    ///
    /// Returns `BankError` if loading or validation fails.
    pub async fn from_source(source: &dyn QuestionBankSource) -> Result<Self, BankError> {
        let bank = QuestionBank::load(source).await?;
        Ok(Self::from_bank(bank))
    }

    #[must_use]
    pub fn from_bank(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
        }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    /// A fresh session at the intro page.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::for_bank(&self.bank)
    }
}
