//! JSON export of the question bank workbook.
//!
//! The file is an object keyed by sheet name. Each sheet is an array of row
//! objects keyed by column name, the shape a spreadsheet-to-JSON export
//! produces:
//!
//! ```json
//! {
//!   "현재 내 모습 진단": [{ "question": "...", "option_A": "...", "type_A": "..." }],
//!   "추구미 진단": [],
//!   "보완 포인트": [{ "type_name": "...", "core_kw": "...", "action_1": "..." }]
//! }
//! ```
//!
//! Sheets may also be keyed by their SQLite table names (`current_state`,
//! `ideal_state`, `improvement`).

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use quiz_core::model::{OptionSlot, Track};
use serde::{Deserialize, Serialize};

use crate::repository::{QuestionBankSource, QuestionRecord, RecommendationRecord, StorageError};
use crate::schema::{
    ACTION_COLUMNS, BankTable, CORE_KEYWORD_COLUMN, CORE_MESSAGE_COLUMN,
    DIRECTION_MESSAGE_COLUMN, QUESTION_COLUMN, TYPE_NAME_COLUMN, option_column, type_column,
};

/// A single spreadsheet cell. Numbers and booleans are kept as typed so
/// exports from spreadsheet tools load without manual cleanup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum Cell {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Cell {
    fn into_text(self) -> String {
        match self {
            Cell::Text(text) => text,
            Cell::Number(number) => number.to_string(),
            Cell::Bool(flag) => flag.to_string(),
        }
    }
}

type Sheet = Vec<BTreeMap<String, Option<Cell>>>;

/// A parsed workbook held in memory.
#[derive(Debug, Clone, Default)]
pub struct JsonWorkbook {
    sheets: BTreeMap<String, Sheet>,
}

impl JsonWorkbook {
    /// Parse a workbook from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the text is not a workbook object.
    pub fn from_json(text: &str) -> Result<Self, StorageError> {
        let sheets: BTreeMap<String, Sheet> = serde_json::from_str(text)
            .map_err(|e| StorageError::Serialization(format!("invalid workbook JSON: {e}")))?;
        Ok(Self { sheets })
    }

    /// Read and parse a workbook file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::MissingSource` if the file does not exist and
    /// `StorageError::Serialization` if it cannot be parsed.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::MissingSource(path.display().to_string())
            } else {
                StorageError::Connection(format!("{}: {e}", path.display()))
            }
        })?;
        Self::from_json(&text)
    }

    /// Build a workbook from typed records, keyed by the Korean sheet names.
    #[must_use]
    pub fn from_records(
        current: &[QuestionRecord],
        ideal: &[QuestionRecord],
        improvement: &[RecommendationRecord],
    ) -> Self {
        let mut sheets = BTreeMap::new();
        sheets.insert(
            BankTable::CurrentState.sheet_name().to_owned(),
            current.iter().map(question_cells).collect(),
        );
        sheets.insert(
            BankTable::IdealState.sheet_name().to_owned(),
            ideal.iter().map(question_cells).collect(),
        );
        sheets.insert(
            BankTable::Improvement.sheet_name().to_owned(),
            improvement.iter().map(recommendation_cells).collect(),
        );
        Self { sheets }
    }

    /// Serialize the workbook as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string_pretty(&self.sheets)
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }

    fn sheet(&self, table: BankTable) -> Result<&Sheet, StorageError> {
        self.sheets
            .get(table.sheet_name())
            .or_else(|| self.sheets.get(table.name()))
            .ok_or(StorageError::MissingTable { table })
    }

    /// A column counts as missing when the header row (the first row) lacks it.
    fn checked_sheet(&self, table: BankTable) -> Result<&Sheet, StorageError> {
        let sheet = self.sheet(table)?;
        if let Some(header) = sheet.first() {
            for column in table.required_columns() {
                if !header.contains_key(column) {
                    return Err(StorageError::MissingColumn { table, column });
                }
            }
        }
        Ok(sheet)
    }

    pub(crate) fn question_records(&self, track: Track) -> Result<Vec<QuestionRecord>, StorageError> {
        let sheet = self.checked_sheet(BankTable::questions(track))?;
        Ok(sheet
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut record = QuestionRecord {
                    row: i + 1,
                    question: cell(row, QUESTION_COLUMN),
                    ..QuestionRecord::default()
                };
                for slot in OptionSlot::ALL {
                    record.options[slot.index()] = cell(row, option_column(slot));
                    record.types[slot.index()] = cell(row, type_column(slot));
                }
                record
            })
            .collect())
    }

    pub(crate) fn recommendation_records(&self) -> Result<Vec<RecommendationRecord>, StorageError> {
        let sheet = self.checked_sheet(BankTable::Improvement)?;
        Ok(sheet
            .iter()
            .enumerate()
            .map(|(i, row)| RecommendationRecord {
                row: i + 1,
                type_name: cell(row, TYPE_NAME_COLUMN),
                core_kw: cell(row, CORE_KEYWORD_COLUMN),
                core_msg: cell(row, CORE_MESSAGE_COLUMN),
                direction_msg: cell(row, DIRECTION_MESSAGE_COLUMN),
                actions: ACTION_COLUMNS.map(|column| cell(row, column)),
            })
            .collect())
    }
}

fn cell(row: &BTreeMap<String, Option<Cell>>, column: &str) -> Option<String> {
    row.get(column).cloned().flatten().map(Cell::into_text)
}

fn text_cell(value: Option<&String>) -> Option<Cell> {
    value.map(|text| Cell::Text(text.clone()))
}

fn question_cells(record: &QuestionRecord) -> BTreeMap<String, Option<Cell>> {
    let mut row = BTreeMap::new();
    row.insert(QUESTION_COLUMN.to_owned(), text_cell(record.question.as_ref()));
    for slot in OptionSlot::ALL {
        row.insert(
            option_column(slot).to_owned(),
            text_cell(record.options[slot.index()].as_ref()),
        );
        row.insert(
            type_column(slot).to_owned(),
            text_cell(record.types[slot.index()].as_ref()),
        );
    }
    row
}

fn recommendation_cells(record: &RecommendationRecord) -> BTreeMap<String, Option<Cell>> {
    let mut row = BTreeMap::new();
    row.insert(TYPE_NAME_COLUMN.to_owned(), text_cell(record.type_name.as_ref()));
    row.insert(CORE_KEYWORD_COLUMN.to_owned(), text_cell(record.core_kw.as_ref()));
    row.insert(CORE_MESSAGE_COLUMN.to_owned(), text_cell(record.core_msg.as_ref()));
    row.insert(
        DIRECTION_MESSAGE_COLUMN.to_owned(),
        text_cell(record.direction_msg.as_ref()),
    );
    for (column, action) in ACTION_COLUMNS.iter().zip(record.actions.iter()) {
        row.insert((*column).to_owned(), text_cell(action.as_ref()));
    }
    row
}

#[async_trait]
impl QuestionBankSource for JsonWorkbook {
    async fn question_rows(&self, track: Track) -> Result<Vec<QuestionRecord>, StorageError> {
        self.question_records(track)
    }

    async fn recommendation_rows(&self) -> Result<Vec<RecommendationRecord>, StorageError> {
        self.recommendation_records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "현재 내 모습 진단": [{
            "question": "Morning routine?",
            "option_A": "Stretch", "type_A": "Natural",
            "option_B": "Espresso", "type_B": "Chic",
            "option_C": "Pastel outfit", "type_C": "Lovely",
            "option_D": "Newspaper", "type_D": "Classic",
            "option_E": "Run", "type_E": "Sporty"
        }],
        "ideal_state": [],
        "보완 포인트": [{
            "type_name": "Natural", "core_kw": "ease",
            "core_msg": "m", "direction_msg": "d",
            "action_1": 1, "action_2": "two", "action_3": null
        }]
    }"#;

    #[tokio::test]
    async fn reads_sheets_by_korean_or_table_name() {
        let workbook = JsonWorkbook::from_json(MINIMAL).unwrap();
        let current = workbook.question_rows(Track::Current).await.unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].row, 1);
        assert_eq!(current[0].option(OptionSlot::D), Some("Newspaper"));
        assert!(workbook.question_rows(Track::Ideal).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn converts_numbers_and_keeps_nulls_empty() {
        let workbook = JsonWorkbook::from_json(MINIMAL).unwrap();
        let rows = workbook.recommendation_rows().await.unwrap();
        assert_eq!(
            rows[0].actions,
            [Some("1".to_owned()), Some("two".to_owned()), None]
        );
    }

    #[tokio::test]
    async fn missing_sheet_is_reported() {
        let workbook = JsonWorkbook::from_json(r#"{ "current_state": [] }"#).unwrap();
        let err = workbook.recommendation_rows().await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::MissingTable {
                table: BankTable::Improvement
            }
        ));
    }

    #[tokio::test]
    async fn missing_header_column_is_reported() {
        let workbook = JsonWorkbook::from_json(
            r#"{ "current_state": [{ "question": "Q", "option_A": "a" }] }"#,
        )
        .unwrap();
        let err = workbook.question_rows(Track::Current).await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::MissingColumn {
                table: BankTable::CurrentState,
                column: "option_B"
            }
        ));
    }

    #[test]
    fn rejects_non_workbook_json() {
        let err = JsonWorkbook::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn export_reloads_the_same_records() {
        let current = vec![QuestionRecord::complete(
            1,
            "Q",
            [("a", "A"), ("b", "B"), ("c", "C"), ("d", "D"), ("e", "E")],
        )];
        let improvement = vec![RecommendationRecord::complete(
            1,
            "A",
            "kw",
            "core",
            "direction",
            ["x", "y", "z"],
        )];
        let json = JsonWorkbook::from_records(&current, &[], &improvement)
            .to_json()
            .unwrap();
        let reloaded = JsonWorkbook::from_json(&json).unwrap();
        assert_eq!(reloaded.question_rows(Track::Current).await.unwrap(), current);
        assert_eq!(reloaded.recommendation_rows().await.unwrap(), improvement);
    }
}
