//! Turns raw bank rows into validated domain types.
//!
//! Every blank or absent required cell is fatal and reported with its table,
//! 1-based row and column name.

use quiz_core::model::{
    CategoryCode, OptionSlot, Question, QuestionError, QuestionOption, QuestionSet,
    Recommendation, RecommendationError, RecommendationTable, Track,
};
use storage::repository::{QuestionRecord, RecommendationRecord};
use storage::schema::{BankTable, QUESTION_COLUMN, TYPE_NAME_COLUMN, option_column, type_column};

use crate::error::BankError;

/// Build the question set for `track` from its rows, preserving row order.
///
/// # Errors
///
/// Returns `BankError::EmptyTable` for an empty table and
/// `BankError::MalformedRow` for the first blank required cell.
pub fn build_questions(track: Track, rows: &[QuestionRecord]) -> Result<QuestionSet, BankError> {
    let table = BankTable::questions(track);
    if rows.is_empty() {
        return Err(BankError::EmptyTable { table });
    }

    let mut questions = Vec::with_capacity(rows.len());
    for record in rows {
        let question = build_question(record).map_err(|err| row_error(table, record.row, err))?;
        questions.push(question);
    }

    let set = QuestionSet::new(track, questions).map_err(|_| BankError::EmptyTable { table })?;
    tracing::debug!(%table, questions = set.len(), "built question set");
    Ok(set)
}

/// Build the recommendation table from the improvement rows.
///
/// # Errors
///
/// Returns `BankError::EmptyTable`, `BankError::MalformedRow` for blank cells
/// and `BankError::DuplicateCategory` when a type appears twice.
pub fn build_recommendations(
    rows: &[RecommendationRecord],
) -> Result<RecommendationTable, BankError> {
    let table = BankTable::Improvement;
    if rows.is_empty() {
        return Err(BankError::EmptyTable { table });
    }

    let mut built: Vec<Recommendation> = Vec::with_capacity(rows.len());
    for record in rows {
        let recommendation =
            build_recommendation(record).map_err(|err| row_error(table, record.row, err))?;
        if let Some(first) = built
            .iter()
            .position(|existing| existing.category() == recommendation.category())
        {
            return Err(BankError::DuplicateCategory {
                code: recommendation.category().clone(),
                first_row: rows[first].row,
                row: record.row,
            });
        }
        built.push(recommendation);
    }

    let last_row = rows.last().map_or(0, |record| record.row);
    let recommendations = RecommendationTable::new(built)
        .map_err(|err| row_error(table, last_row, err.into()))?;
    tracing::debug!(%table, types = recommendations.len(), "built recommendation table");
    Ok(recommendations)
}

fn cell(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

fn build_question(record: &QuestionRecord) -> Result<Question, quiz_core::Error> {
    let text = cell(record.question.as_deref());
    if text.trim().is_empty() {
        return Err(QuestionError::EmptyText.into());
    }

    let [a, b, c, d, e] = OptionSlot::ALL.map(|slot| {
        QuestionOption::from_cells(slot, cell(record.option(slot)), cell(record.option_type(slot)))
    });
    let options = [a?, b?, c?, d?, e?];
    Ok(Question::new(text, options)?)
}

fn build_recommendation(record: &RecommendationRecord) -> Result<Recommendation, quiz_core::Error> {
    let category = CategoryCode::new(cell(record.type_name.as_deref()))?;
    let actions = record
        .actions
        .clone()
        .map(|action| action.unwrap_or_default());
    Ok(Recommendation::new(
        category,
        cell(record.core_kw.as_deref()),
        cell(record.core_msg.as_deref()),
        cell(record.direction_msg.as_deref()),
        actions,
    )?)
}

/// Blank cells become `MalformedRow` with the offending column.
fn row_error(table: BankTable, row: usize, err: quiz_core::Error) -> BankError {
    let column = match &err {
        quiz_core::Error::Question(QuestionError::EmptyText) => Some(QUESTION_COLUMN),
        quiz_core::Error::Question(QuestionError::EmptyOptionText { slot }) => {
            Some(option_column(*slot))
        }
        quiz_core::Error::Question(QuestionError::EmptyCategory { slot }) => {
            Some(type_column(*slot))
        }
        quiz_core::Error::Recommendation(RecommendationError::EmptyField { field }) => Some(*field),
        quiz_core::Error::CategoryCode(_) => Some(TYPE_NAME_COLUMN),
        _ => None,
    };

    match column {
        Some(column) => BankError::MalformedRow { table, row, column },
        None => BankError::InvalidRow {
            table,
            row,
            source: err,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_row(row: usize) -> QuestionRecord {
        QuestionRecord::complete(
            row,
            "Pick a weekend",
            [
                ("Hike", "Natural"),
                ("Gallery", "Chic"),
                ("Picnic", "Lovely"),
                ("Opera", "Classic"),
                ("Surf", "Sporty"),
            ],
        )
    }

    fn improvement_row(row: usize, code: &str) -> RecommendationRecord {
        RecommendationRecord::complete(row, code, "kw", "core", "direction", ["1", "2", "3"])
    }

    #[test]
    fn builds_questions_in_row_order() {
        let mut second = question_row(2);
        second.question = Some("  Second  ".into());
        let set = build_questions(Track::Current, &[question_row(1), second]).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).unwrap().text(), "Second");
        let first = set.get(0).unwrap();
        assert_eq!(first.option(OptionSlot::D).text(), "Opera");
        assert_eq!(first.option(OptionSlot::D).category().as_str(), "Classic");
    }

    #[test]
    fn empty_tables_are_rejected() {
        assert!(matches!(
            build_questions(Track::Ideal, &[]),
            Err(BankError::EmptyTable {
                table: BankTable::IdealState
            })
        ));
        assert!(matches!(
            build_recommendations(&[]),
            Err(BankError::EmptyTable {
                table: BankTable::Improvement
            })
        ));
    }

    #[test]
    fn blank_question_text_names_the_question_column() {
        let mut row = question_row(3);
        row.question = Some("   ".into());
        let err = build_questions(Track::Current, &[question_row(1), row]).unwrap_err();
        assert!(matches!(
            err,
            BankError::MalformedRow {
                table: BankTable::CurrentState,
                row: 3,
                column: "question"
            }
        ));
    }

    #[test]
    fn absent_type_names_the_type_column() {
        let mut row = question_row(1);
        row.types[OptionSlot::C.index()] = None;
        let err = build_questions(Track::Ideal, &[row]).unwrap_err();
        assert!(matches!(
            err,
            BankError::MalformedRow {
                table: BankTable::IdealState,
                row: 1,
                column: "type_C"
            }
        ));
    }

    #[test]
    fn blank_option_text_names_the_option_column() {
        let mut row = question_row(1);
        row.options[OptionSlot::E.index()] = Some(String::new());
        let err = build_questions(Track::Current, &[row]).unwrap_err();
        assert!(matches!(
            err,
            BankError::MalformedRow {
                column: "option_E",
                ..
            }
        ));
    }

    #[test]
    fn builds_recommendations_keyed_by_type() {
        let table =
            build_recommendations(&[improvement_row(1, "Natural"), improvement_row(2, " Chic ")])
                .unwrap();
        let chic = CategoryCode::new("Chic").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&chic).unwrap().actions()[2], "3");
    }

    #[test]
    fn blank_recommendation_cells_name_their_column() {
        let mut row = improvement_row(4, "Lovely");
        row.actions[1] = None;
        let err = build_recommendations(&[row]).unwrap_err();
        assert!(matches!(
            err,
            BankError::MalformedRow {
                table: BankTable::Improvement,
                row: 4,
                column: "action_2"
            }
        ));

        let mut row = improvement_row(1, "Lovely");
        row.type_name = None;
        let err = build_recommendations(&[row]).unwrap_err();
        assert!(matches!(
            err,
            BankError::MalformedRow {
                column: "type_name",
                ..
            }
        ));
    }

    #[test]
    fn duplicate_types_report_both_rows() {
        let err = build_recommendations(&[
            improvement_row(1, "Natural"),
            improvement_row(2, "Chic"),
            improvement_row(3, "Natural"),
        ])
        .unwrap_err();
        match err {
            BankError::DuplicateCategory {
                code,
                first_row,
                row,
            } => {
                assert_eq!(code.as_str(), "Natural");
                assert_eq!((first_row, row), (1, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
