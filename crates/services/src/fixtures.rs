//! Banks shared by the unit tests of this crate.

use quiz_core::model::{OptionSlot, Track};
use storage::repository::{
    InMemoryRepository, QuestionBankWriter, QuestionRecord, RecommendationRecord,
};

use crate::question_bank::QuestionBank;

/// Question rows whose option in slot `X` always scores for code `"X"`.
pub(crate) fn question_rows(track: Track, count: usize) -> Vec<QuestionRecord> {
    (1..=count)
        .map(|row| QuestionRecord {
            row,
            question: Some(format!("{track} question {row}")),
            options: OptionSlot::ALL.map(|slot| Some(format!("{track} {row} option {slot}"))),
            types: OptionSlot::ALL.map(|slot| Some(slot.to_string())),
        })
        .collect()
}

pub(crate) fn recommendation_rows(codes: &[&str]) -> Vec<RecommendationRecord> {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| RecommendationRecord {
            row: i + 1,
            type_name: Some((*code).to_owned()),
            core_kw: Some(format!("keyword {code}")),
            core_msg: Some(format!("core {code}")),
            direction_msg: Some(format!("direction {code}")),
            actions: [1, 2, 3].map(|n| Some(format!("{code} action {n}"))),
        })
        .collect()
}

pub(crate) async fn uniform_repository(current: usize, ideal: usize) -> InMemoryRepository {
    let repo = InMemoryRepository::new();
    repo.replace_question_rows(Track::Current, &question_rows(Track::Current, current))
        .await
        .unwrap();
    repo.replace_question_rows(Track::Ideal, &question_rows(Track::Ideal, ideal))
        .await
        .unwrap();
    repo.replace_recommendation_rows(&recommendation_rows(&["A", "B", "C", "D", "E"]))
        .await
        .unwrap();
    repo
}

pub(crate) async fn uniform_bank(current: usize, ideal: usize) -> QuestionBank {
    let repo = uniform_repository(current, ideal).await;
    QuestionBank::load(&repo).await.unwrap()
}
