#![forbid(unsafe_code)]

pub mod app_services;
pub mod builder;
pub mod error;
pub mod question_bank;
pub mod sessions;

#[cfg(test)]
mod fixtures;

pub use app_services::AppServices;
pub use error::{BankError, RenderError, SessionError};
pub use question_bank::{BankSummary, QuestionBank};
pub use sessions::{OptionView, PageView, QuizEvent, QuizProgress, QuizSession, render_page};
