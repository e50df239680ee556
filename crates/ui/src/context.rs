use std::sync::Arc;

use services::{AppServices, QuestionBank, QuizSession};

pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<QuestionBank>;
}

impl UiApp for AppServices {
    fn question_bank(&self) -> Arc<QuestionBank> {
        self.bank()
    }
}

#[derive(Clone)]
pub struct AppContext {
    bank: Arc<QuestionBank>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank: app.question_bank(),
        }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    /// A fresh session sized for the loaded bank.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::for_bank(&self.bank)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
