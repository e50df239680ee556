use quiz_core::model::OptionSlot;
use services::{
    PageView, QuestionBank, QuizEvent, QuizProgress, QuizSession, RenderError, SessionError,
    render_page,
};

/// Shown under the name input when the quiz is started without a name.
pub const EMPTY_NAME_WARNING: &str = "이름을 입력해주세요.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start(String),
    Select(OptionSlot),
    Continue,
    Confirm,
    Restart,
}

impl QuizIntent {
    fn into_event(self) -> QuizEvent {
        match self {
            QuizIntent::Start(name) => QuizEvent::Start { name },
            QuizIntent::Select(slot) => QuizEvent::Select { slot },
            QuizIntent::Continue => QuizEvent::Continue,
            QuizIntent::Confirm => QuizEvent::Confirm,
            QuizIntent::Restart => QuizEvent::Restart,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    session: QuizSession,
    warning: Option<&'static str>,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            warning: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn warning(&self) -> Option<&'static str> {
        self.warning
    }

    #[must_use]
    pub fn progress(&self) -> Option<QuizProgress> {
        self.session.progress()
    }

    /// # Errors
    ///
    /// Returns the `RenderError` of the page the session is on.
    pub fn page(&self, bank: &QuestionBank) -> Result<PageView, RenderError> {
        render_page(bank, &self.session)
    }

    /// Apply `intent` to the session.
    ///
    /// A blank name raises the intro warning; any accepted intent clears it.
    ///
    /// # Errors
    ///
    /// Returns the `SessionError` that rejected the intent. The session is
    /// unchanged in that case.
    pub fn dispatch(&mut self, bank: &QuestionBank, intent: QuizIntent) -> Result<(), SessionError> {
        match self.session.apply(bank, intent.into_event()) {
            Ok(_) => {
                self.warning = None;
                Ok(())
            }
            Err(SessionError::EmptyName) => {
                self.warning = Some(EMPTY_NAME_WARNING);
                Err(SessionError::EmptyName)
            }
            Err(err) => Err(err),
        }
    }
}

#[must_use]
pub fn progress_label(progress: QuizProgress) -> String {
    format!("{} / {}", progress.number(), progress.total)
}

#[must_use]
pub fn type_result_title(name: &str, ideal_type: &str) -> String {
    format!("{name}님의 추구미는 '{ideal_type}' 입니다")
}

#[must_use]
pub fn keyword_line(keyword: &str) -> String {
    format!("키워드: {keyword}")
}

#[must_use]
pub fn current_type_line(current_type: &str) -> String {
    format!("현재 나의 모습: '{current_type}'")
}
