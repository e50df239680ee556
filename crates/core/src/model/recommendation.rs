use thiserror::Error;

use crate::model::ids::CategoryCode;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecommendationError {
    #[error("recommendation field `{field}` cannot be empty")]
    EmptyField { field: &'static str },

    #[error("duplicate recommendation for category {0}")]
    Duplicate(CategoryCode),
}

/// Display text for one ideal-self category: keyword, messages and three actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    category: CategoryCode,
    core_keyword: String,
    core_message: String,
    direction_message: String,
    actions: [String; 3],
}

impl Recommendation {
    /// # Errors
    ///
    /// Returns `RecommendationError::EmptyField` naming the first blank field.
    pub fn new(
        category: CategoryCode,
        core_keyword: impl Into<String>,
        core_message: impl Into<String>,
        direction_message: impl Into<String>,
        actions: [String; 3],
    ) -> Result<Self, RecommendationError> {
        let core_keyword = non_blank("core_kw", core_keyword.into())?;
        let core_message = non_blank("core_msg", core_message.into())?;
        let direction_message = non_blank("direction_msg", direction_message.into())?;
        let [a1, a2, a3] = actions;
        let actions = [
            non_blank("action_1", a1)?,
            non_blank("action_2", a2)?,
            non_blank("action_3", a3)?,
        ];

        Ok(Self {
            category,
            core_keyword,
            core_message,
            direction_message,
            actions,
        })
    }

    #[must_use]
    pub fn category(&self) -> &CategoryCode {
        &self.category
    }

    #[must_use]
    pub fn core_keyword(&self) -> &str {
        &self.core_keyword
    }

    #[must_use]
    pub fn core_message(&self) -> &str {
        &self.core_message
    }

    #[must_use]
    pub fn direction_message(&self) -> &str {
        &self.direction_message
    }

    /// The three daily actions, in table order.
    #[must_use]
    pub fn actions(&self) -> &[String; 3] {
        &self.actions
    }
}

fn non_blank(field: &'static str, value: String) -> Result<String, RecommendationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RecommendationError::EmptyField { field });
    }
    Ok(trimmed.to_owned())
}

/// Recommendations keyed by category code, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationTable {
    rows: Vec<Recommendation>,
}

impl RecommendationTable {
    /// # Errors
    ///
    /// Returns `RecommendationError::Duplicate` if two rows share a category code.
    pub fn new(rows: Vec<Recommendation>) -> Result<Self, RecommendationError> {
        for (i, row) in rows.iter().enumerate() {
            if rows[..i].iter().any(|prev| prev.category == row.category) {
                return Err(RecommendationError::Duplicate(row.category.clone()));
            }
        }
        Ok(Self { rows })
    }

    /// Exact-match lookup by category code.
    #[must_use]
    pub fn get(&self, category: &CategoryCode) -> Option<&Recommendation> {
        self.rows.iter().find(|row| &row.category == category)
    }

    #[must_use]
    pub fn contains(&self, category: &CategoryCode) -> bool {
        self.get(category).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recommendation> {
        self.rows.iter()
    }
}
