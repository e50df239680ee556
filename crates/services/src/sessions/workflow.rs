use quiz_core::model::{OptionSlot, Page, PageLayout, SessionState, Track};

use super::progress::QuizProgress;
use crate::error::SessionError;
use crate::question_bank::QuestionBank;

/// User actions accepted by a quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// Submit the intro form with the entered name.
    Start { name: String },
    /// Pick one of the five options of the question on screen.
    Select { slot: OptionSlot },
    /// Leave the interstitial page.
    Continue,
    /// Move from the type result to the improvement points.
    Confirm,
    /// Go back to the intro with a clean slate.
    Restart,
}

impl QuizEvent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            QuizEvent::Start { .. } => "start",
            QuizEvent::Select { .. } => "select",
            QuizEvent::Continue => "continue",
            QuizEvent::Confirm => "confirm",
            QuizEvent::Restart => "restart",
        }
    }
}

/// One user's run through the quiz.
///
/// Pages only move forward, one at a time, until `Restart`. A rejected
/// event leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    state: SessionState,
    layout: PageLayout,
}

impl QuizSession {
    #[must_use]
    pub fn new(layout: PageLayout) -> Self {
        Self {
            state: SessionState::new(),
            layout,
        }
    }

    /// A fresh session sized for `bank`.
    #[must_use]
    pub fn for_bank(bank: &QuestionBank) -> Self {
        Self::new(bank.layout())
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn layout(&self) -> PageLayout {
        self.layout
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.state.name()
    }

    /// The page the session is on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::PageOutOfRange` if the page number is past the
    /// fix-result page, which only happens when the layout does not match.
    pub fn page(&self) -> Result<Page, SessionError> {
        let page = self.state.page();
        self.layout
            .page_at(page)
            .ok_or(SessionError::PageOutOfRange { page })
    }

    /// Progress within the current track, `None` outside question pages.
    #[must_use]
    pub fn progress(&self) -> Option<QuizProgress> {
        let (track, index) = self.page().ok()?.question()?;
        Some(QuizProgress {
            track,
            answered: index,
            total: self.layout.total_for(track),
        })
    }

    /// Apply `event` and return the page that follows.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyName` for a blank name on the intro page
    /// and `SessionError::InvalidTransition` for an event the current page
    /// does not accept. The session is not modified in either case.
    pub fn apply(&mut self, bank: &QuestionBank, event: QuizEvent) -> Result<Page, SessionError> {
        let from = self.page()?;

        match (from, event) {
            (Page::Intro, QuizEvent::Start { name }) => {
                let name = name.trim();
                if name.is_empty() {
                    tracing::warn!("start rejected: blank name");
                    return Err(SessionError::EmptyName);
                }
                self.state.set_name(name);
                self.state.advance();
            }
            (Page::CurrentQuestion { index }, QuizEvent::Select { slot }) => {
                self.record(bank, Track::Current, index, slot)?;
            }
            (Page::IdealQuestion { index }, QuizEvent::Select { slot }) => {
                self.record(bank, Track::Ideal, index, slot)?;
            }
            (Page::Interstitial, QuizEvent::Continue) | (Page::TypeResult, QuizEvent::Confirm) => {
                self.state.advance();
            }
            (Page::FixResult, QuizEvent::Restart) => {
                self.state.reset();
            }
            (page, event) => {
                tracing::warn!(page = page.name(), event = event.name(), "transition rejected");
                return Err(SessionError::InvalidTransition {
                    page: page.name(),
                    event: event.name(),
                });
            }
        }

        let to = self.page()?;
        tracing::debug!(from = from.name(), to = to.name(), page = self.state.page(), "quiz transition");
        Ok(to)
    }

    fn record(
        &mut self,
        bank: &QuestionBank,
        track: Track,
        index: usize,
        slot: OptionSlot,
    ) -> Result<(), SessionError> {
        let question = bank
            .questions(track)
            .get(index)
            .ok_or(SessionError::MissingQuestion { track, index })?;
        let code = question.option(slot).category();
        let count = self.state.tally_mut(track).record(code);
        tracing::debug!(%track, question = index + 1, %slot, %code, count, "answer recorded");
        self.state.advance();
        Ok(())
    }
}
