//! Bundled sample bank, used by `seed` when no workbook is given and by tests
//! that need a realistic bank.

use crate::repository::StorageError;
use crate::workbook::JsonWorkbook;

/// Raw JSON of the sample workbook: five style types, four questions per track.
pub const SAMPLE_WORKBOOK_JSON: &str = include_str!("../data/sample_workbook.json");

/// Parse the bundled sample workbook.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the bundled file is malformed.
pub fn sample_workbook() -> Result<JsonWorkbook, StorageError> {
    JsonWorkbook::from_json(SAMPLE_WORKBOOK_JSON)
}
