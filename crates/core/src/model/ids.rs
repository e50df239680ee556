use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier shared by every option that belongs to the same style dimension.
///
/// Codes are compared exactly after surrounding whitespace is trimmed, so a
/// spreadsheet cell holding `" Natural "` and one holding `"Natural"` name the
/// same category.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryCode(String);

impl CategoryCode {
    /// Creates a new `CategoryCode` from raw cell text.
    ///
    /// # Errors
    ///
    /// Returns `CategoryCodeError::Empty` if the trimmed text is empty.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CategoryCodeError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CategoryCodeError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CategoryCodeError {
    #[error("category code cannot be empty")]
    Empty,
}

/// One of the five fixed answer positions of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionSlot {
    A,
    B,
    C,
    D,
    E,
}

impl OptionSlot {
    /// All slots in display order.
    pub const ALL: [OptionSlot; 5] = [
        OptionSlot::A,
        OptionSlot::B,
        OptionSlot::C,
        OptionSlot::D,
        OptionSlot::E,
    ];

    /// Zero-based position of the slot.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            OptionSlot::A => 0,
            OptionSlot::B => 1,
            OptionSlot::C => 2,
            OptionSlot::D => 3,
            OptionSlot::E => 4,
        }
    }

    /// Upper-case letter used in column names (`option_A`, `type_A`, ...).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            OptionSlot::A => 'A',
            OptionSlot::B => 'B',
            OptionSlot::C => 'C',
            OptionSlot::D => 'D',
            OptionSlot::E => 'E',
        }
    }
}

// ─── Debug / Display Implementations ──────────────────────────────────────────

impl fmt::Debug for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryCode({:?})", self.0)
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for OptionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

impl FromStr for CategoryCode {
    type Err = CategoryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
