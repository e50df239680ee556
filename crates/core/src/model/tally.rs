use crate::model::ids::CategoryCode;

/// Running selection counts per category for one track.
///
/// Entries keep the order in which each code was first recorded; scoring
/// relies on that order to break ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(CategoryCode, u32)>,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one selection for `category` and returns its new count.
    pub fn record(&mut self, category: &CategoryCode) -> u32 {
        if let Some((_, count)) = self.entries.iter_mut().find(|(code, _)| code == category) {
            *count = count.saturating_add(1);
            return *count;
        }
        self.entries.push((category.clone(), 1));
        1
    }

    /// Count for `category`, zero when never recorded.
    #[must_use]
    pub fn count(&self, category: &CategoryCode) -> u32 {
        self.entries
            .iter()
            .find(|(code, _)| code == category)
            .map_or(0, |(_, count)| *count)
    }

    /// Sum of all counts, i.e. the number of answered questions.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries
            .iter()
            .fold(0_u32, |acc, (_, count)| acc.saturating_add(*count))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in first-recorded order.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryCode, u32)> {
        self.entries.iter().map(|(code, count)| (code, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> CategoryCode {
        CategoryCode::new(raw).unwrap()
    }

    #[test]
    fn record_increments_by_one() {
        let mut tally = Tally::new();
        assert_eq!(tally.record(&code("A")), 1);
        assert_eq!(tally.record(&code("A")), 2);
        assert_eq!(tally.record(&code("B")), 1);
        assert_eq!(tally.count(&code("A")), 2);
        assert_eq!(tally.count(&code("Z")), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn iteration_follows_first_recorded_order() {
        let mut tally = Tally::new();
        for raw in ["C", "A", "C", "B", "A"] {
            tally.record(&code(raw));
        }
        let order: Vec<&str> = tally.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }
}
