use quiz_core::model::OptionSlot;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::{QuestionRecord, RecommendationRecord, StorageError};
use crate::schema::{
    ACTION_COLUMNS, CORE_KEYWORD_COLUMN, CORE_MESSAGE_COLUMN, DIRECTION_MESSAGE_COLUMN,
    QUESTION_COLUMN, TYPE_NAME_COLUMN, option_column, type_column,
};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn text(row: &SqliteRow, column: &str) -> Result<Option<String>, StorageError> {
    row.try_get::<Option<String>, _>(column).map_err(ser)
}

pub(crate) fn map_question_row(
    position: usize,
    row: &SqliteRow,
) -> Result<QuestionRecord, StorageError> {
    let mut options: [Option<String>; 5] = Default::default();
    let mut types: [Option<String>; 5] = Default::default();
    for slot in OptionSlot::ALL {
        options[slot.index()] = text(row, option_column(slot))?;
        types[slot.index()] = text(row, type_column(slot))?;
    }

    Ok(QuestionRecord {
        row: position,
        question: text(row, QUESTION_COLUMN)?,
        options,
        types,
    })
}

pub(crate) fn map_recommendation_row(
    position: usize,
    row: &SqliteRow,
) -> Result<RecommendationRecord, StorageError> {
    let mut actions: [Option<String>; 3] = Default::default();
    for (slot, column) in actions.iter_mut().zip(ACTION_COLUMNS) {
        *slot = text(row, column)?;
    }

    Ok(RecommendationRecord {
        row: position,
        type_name: text(row, TYPE_NAME_COLUMN)?,
        core_kw: text(row, CORE_KEYWORD_COLUMN)?,
        core_msg: text(row, CORE_MESSAGE_COLUMN)?,
        direction_msg: text(row, DIRECTION_MESSAGE_COLUMN)?,
        actions,
    })
}
