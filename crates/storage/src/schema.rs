//! Table and column names of the question bank.
//!
//! The bank is authored as a workbook with three sheets. The SQLite backend
//! stores each sheet as a table with the same column names; the JSON backend
//! keeps the Korean sheet names as object keys.

use quiz_core::model::{OptionSlot, Track};

pub const QUESTION_COLUMN: &str = "question";

pub const TYPE_NAME_COLUMN: &str = "type_name";
pub const CORE_KEYWORD_COLUMN: &str = "core_kw";
pub const CORE_MESSAGE_COLUMN: &str = "core_msg";
pub const DIRECTION_MESSAGE_COLUMN: &str = "direction_msg";
pub const ACTION_COLUMNS: [&str; 3] = ["action_1", "action_2", "action_3"];

/// One of the three named tables of a question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BankTable {
    CurrentState,
    IdealState,
    Improvement,
}

impl BankTable {
    pub const ALL: [BankTable; 3] = [
        BankTable::CurrentState,
        BankTable::IdealState,
        BankTable::Improvement,
    ];

    /// Question table holding the given track.
    #[must_use]
    pub const fn questions(track: Track) -> Self {
        match track {
            Track::Current => BankTable::CurrentState,
            Track::Ideal => BankTable::IdealState,
        }
    }

    /// SQLite table name, also accepted as a workbook sheet name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BankTable::CurrentState => "current_state",
            BankTable::IdealState => "ideal_state",
            BankTable::Improvement => "improvement",
        }
    }

    /// Sheet name used by the hand-edited workbook.
    #[must_use]
    pub const fn sheet_name(self) -> &'static str {
        match self {
            BankTable::CurrentState => "현재 내 모습 진단",
            BankTable::IdealState => "추구미 진단",
            BankTable::Improvement => "보완 포인트",
        }
    }

    /// Columns that must exist for the table to be readable.
    #[must_use]
    pub fn required_columns(self) -> Vec<&'static str> {
        match self {
            BankTable::CurrentState | BankTable::IdealState => {
                let mut columns = vec![QUESTION_COLUMN];
                columns.extend(OptionSlot::ALL.map(option_column));
                columns.extend(OptionSlot::ALL.map(type_column));
                columns
            }
            BankTable::Improvement => {
                let mut columns = vec![
                    TYPE_NAME_COLUMN,
                    CORE_KEYWORD_COLUMN,
                    CORE_MESSAGE_COLUMN,
                    DIRECTION_MESSAGE_COLUMN,
                ];
                columns.extend(ACTION_COLUMNS);
                columns
            }
        }
    }
}

impl std::fmt::Display for BankTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// `option_A` .. `option_E`.
#[must_use]
pub const fn option_column(slot: OptionSlot) -> &'static str {
    match slot {
        OptionSlot::A => "option_A",
        OptionSlot::B => "option_B",
        OptionSlot::C => "option_C",
        OptionSlot::D => "option_D",
        OptionSlot::E => "option_E",
    }
}

/// `type_A` .. `type_E`.
#[must_use]
pub const fn type_column(slot: OptionSlot) -> &'static str {
    match slot {
        OptionSlot::A => "type_A",
        OptionSlot::B => "type_B",
        OptionSlot::C => "type_C",
        OptionSlot::D => "type_D",
        OptionSlot::E => "type_E",
    }
}
