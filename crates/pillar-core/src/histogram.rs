//! Category distribution counts for before/after reports.

use serde::Serialize;

/// Counts per category, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryHistogram {
    /// `(category, count)` pairs in the order categories were first recorded.
    counts: Vec<(String, usize)>,
}

impl CategoryHistogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one item to `category`.
    pub fn record(&mut self, category: &str) {
        match self.counts.iter_mut().find(|(c, _)| c == category) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((category.to_string(), 1)),
        }
    }

    /// Returns the count for `category`, zero if never recorded.
    pub fn get(&self, category: &str) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| c == category)
            .map_or(0, |(_, count)| *count)
    }

    /// Total number of recorded items.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns categories by descending count; ties keep first-seen order.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(category, count)| (category.as_str(), *count))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl<'a> FromIterator<&'a str> for CategoryHistogram {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut histogram = Self::new();
        for category in iter {
            histogram.record(category);
        }
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_counts() {
        let histogram: CategoryHistogram = ["Growth", "GEO", "Growth", ""].into_iter().collect();
        assert_eq!(histogram.get("Growth"), 2);
        assert_eq!(histogram.get("GEO"), 1);
        assert_eq!(histogram.get(""), 1);
        assert_eq!(histogram.get("Producto"), 0);
        assert_eq!(histogram.total(), 4);
    }

    #[test]
    fn sorted_by_count_then_first_seen() {
        let histogram: CategoryHistogram = ["B", "A", "C", "A", "C"].into_iter().collect();
        assert_eq!(histogram.sorted(), vec![("A", 2), ("C", 2), ("B", 1)]);
    }

    #[test]
    fn empty_histogram() {
        let histogram = CategoryHistogram::new();
        assert!(histogram.is_empty());
        assert_eq!(histogram.total(), 0);
        assert!(histogram.sorted().is_empty());
    }

    #[test]
    fn serializes_as_pairs() {
        let histogram: CategoryHistogram = ["GEO"].into_iter().collect();
        let value = serde_json::to_value(&histogram).unwrap();
        assert_eq!(value, serde_json::json!([["GEO", 1]]));
    }
}
