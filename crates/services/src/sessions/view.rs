use quiz_core::model::{OptionSlot, Page, Track};
use quiz_core::resolve;

use super::workflow::QuizSession;
use crate::error::RenderError;
use crate::question_bank::QuestionBank;

/// One answer button of a question page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub slot: OptionSlot,
    pub text: String,
}

/// Presentation-agnostic content of the page a session is on.
///
/// Carries display text only; the UI decides layout and labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Intro,
    Question {
        track: Track,
        step_title: &'static str,
        /// 1-based position within the track.
        number: usize,
        total: usize,
        text: String,
        options: [OptionView; 5],
    },
    Interstitial,
    TypeResult {
        name: String,
        current_type: String,
        ideal_type: String,
        keyword: String,
    },
    FixResult {
        name: String,
        ideal_type: String,
        core_message: String,
        direction_message: String,
        actions: [String; 3],
    },
}

/// Header shown above the questions of `track`.
#[must_use]
pub const fn step_title(track: Track) -> &'static str {
    match track {
        Track::Current => "Step 1. 현재상태 진단",
        Track::Ideal => "Step 2. 추구미 진단",
    }
}

/// Build the view for the page `session` is on.
///
/// Pure: the same session and bank always give the same view.
///
/// # Errors
///
/// Returns `RenderError::Scoring` if a result page is reached with an empty
/// tally and `RenderError::UnknownCategory` if the ideal type has no
/// recommendation.
pub fn render_page(bank: &QuestionBank, session: &QuizSession) -> Result<PageView, RenderError> {
    let page_no = session.state().page();
    let page = session
        .layout()
        .page_at(page_no)
        .ok_or(RenderError::PageOutOfRange { page: page_no })?;

    let view = match page {
        Page::Intro => PageView::Intro,
        Page::CurrentQuestion { index } => question_view(bank, Track::Current, index)?,
        Page::IdealQuestion { index } => question_view(bank, Track::Ideal, index)?,
        Page::Interstitial => PageView::Interstitial,
        Page::TypeResult => {
            let current = resolve(session.state().current_tally())?;
            let ideal = resolve(session.state().ideal_tally())?;
            let recommendation = bank.lookup(&ideal)?;
            PageView::TypeResult {
                name: session.name().to_owned(),
                current_type: current.as_str().to_owned(),
                ideal_type: ideal.as_str().to_owned(),
                keyword: recommendation.core_keyword().to_owned(),
            }
        }
        Page::FixResult => {
            let ideal = resolve(session.state().ideal_tally())?;
            let recommendation = bank.lookup(&ideal)?;
            PageView::FixResult {
                name: session.name().to_owned(),
                ideal_type: ideal.as_str().to_owned(),
                core_message: recommendation.core_message().to_owned(),
                direction_message: recommendation.direction_message().to_owned(),
                actions: recommendation.actions().clone(),
            }
        }
    };
    Ok(view)
}

fn question_view(bank: &QuestionBank, track: Track, index: usize) -> Result<PageView, RenderError> {
    let questions = bank.questions(track);
    let question = questions
        .get(index)
        .ok_or(RenderError::MissingQuestion { track, index })?;

    Ok(PageView::Question {
        track,
        step_title: step_title(track),
        number: index + 1,
        total: questions.len(),
        text: question.text().to_owned(),
        options: OptionSlot::ALL.map(|slot| OptionView {
            slot,
            text: question.option(slot).text().to_owned(),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::sessions::QuizEvent;
    use quiz_core::ScoringError;
    use quiz_core::model::PageLayout;

    fn start(bank: &QuestionBank) -> QuizSession {
        let mut session = QuizSession::for_bank(bank);
        session
            .apply(bank, QuizEvent::Start { name: "Yuna".into() })
            .unwrap();
        session
    }

    #[tokio::test]
    async fn intro_and_question_pages() {
        let bank = fixtures::uniform_bank(2, 2).await;
        let session = QuizSession::for_bank(&bank);
        assert_eq!(render_page(&bank, &session).unwrap(), PageView::Intro);

        let session = start(&bank);
        let PageView::Question {
            track,
            step_title,
            number,
            total,
            text,
            options,
        } = render_page(&bank, &session).unwrap()
        else {
            panic!("expected a question page");
        };
        assert_eq!(track, Track::Current);
        assert_eq!(step_title, "Step 1. 현재상태 진단");
        assert_eq!((number, total), (1, 2));
        assert_eq!(text, "current question 1");
        assert_eq!(options[3].slot, OptionSlot::D);
        assert_eq!(options[3].text, "current 1 option D");
    }

    #[tokio::test]
    async fn render_does_not_touch_the_session() {
        let bank = fixtures::uniform_bank(1, 1).await;
        let session = start(&bank);
        let before = session.clone();
        let first = render_page(&bank, &session).unwrap();
        let second = render_page(&bank, &session).unwrap();
        assert_eq!(first, second);
        assert_eq!(session, before);
    }

    #[tokio::test]
    async fn result_pages_use_the_winning_codes() {
        let bank = fixtures::uniform_bank(2, 3).await;
        let mut session = start(&bank);
        for slot in [OptionSlot::A, OptionSlot::E] {
            session.apply(&bank, QuizEvent::Select { slot }).unwrap();
        }
        session.apply(&bank, QuizEvent::Continue).unwrap();
        for slot in [OptionSlot::C, OptionSlot::B, OptionSlot::B] {
            session.apply(&bank, QuizEvent::Select { slot }).unwrap();
        }

        assert_eq!(
            render_page(&bank, &session).unwrap(),
            PageView::TypeResult {
                name: "Yuna".into(),
                current_type: "A".into(),
                ideal_type: "B".into(),
                keyword: "keyword B".into(),
            }
        );

        session.apply(&bank, QuizEvent::Confirm).unwrap();
        let PageView::FixResult {
            ideal_type,
            core_message,
            actions,
            ..
        } = render_page(&bank, &session).unwrap()
        else {
            panic!("expected the fix result page");
        };
        assert_eq!(ideal_type, "B");
        assert_eq!(core_message, "core B");
        assert_eq!(actions, ["B action 1", "B action 2", "B action 3"]);
    }

    #[tokio::test]
    async fn result_with_empty_tally_is_a_scoring_error() {
        let bank = fixtures::uniform_bank(1, 1).await;
        let mut session = QuizSession::new(PageLayout::new(0, 0));
        session
            .apply(&bank, QuizEvent::Start { name: "Yuna".into() })
            .unwrap();
        session.apply(&bank, QuizEvent::Continue).unwrap();

        assert_eq!(
            render_page(&bank, &session).unwrap_err(),
            RenderError::Scoring(ScoringError::EmptyTally)
        );
    }
}
