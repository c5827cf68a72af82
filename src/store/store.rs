//! Read-only in-memory view over the question bank dataset.

use crate::store::record::QuestionRecord;

/// An immutable, fully materialized view of the question bank.
///
/// The store is built once (by the loader or from in-memory records) before
/// any session starts and is never mutated afterwards. Sessions take
/// snapshots of filtered projections, so even if a store were rebuilt, an
/// in-flight pagination would be unaffected.
///
/// Category enumeration order is the dataset's first-seen order; that order
/// drives both the `categories` listing and the category scan performed by
/// the intent classifier.
///
/// # Examples
///
/// ```
/// use qbank::store::{QuestionRecord, QuestionStore};
///
/// let store = QuestionStore::new(vec![
///     QuestionRecord::new("AI", "What is a perceptron?", "5"),
///     QuestionRecord::new("ML", "Define overfitting.", "2"),
///     QuestionRecord::new("AI", "Explain A* search.", "10"),
/// ]);
///
/// assert_eq!(store.len(), 3);
/// assert_eq!(store.categories(), &["AI".to_string(), "ML".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct QuestionStore {
    records: Vec<QuestionRecord>,
    categories: Vec<String>,
}

impl QuestionStore {
    /// Create a store from already-materialized records.
    ///
    /// Distinct non-blank categories are enumerated in first-seen order.
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for record in &records {
            let category = record.category.trim();
            if category.is_empty() {
                continue;
            }
            if !categories.iter().any(|c| c == &record.category) {
                categories.push(record.category.clone());
            }
        }

        QuestionStore {
            records,
            categories,
        }
    }

    /// All records, in dataset order.
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// Distinct non-blank category names, in first-seen dataset order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the given category (case-insensitive).
    pub fn category_len(&self, category: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.category.eq_ignore_ascii_case(category))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> QuestionStore {
        QuestionStore::new(vec![
            QuestionRecord::new("AI", "What is a perceptron?", "5"),
            QuestionRecord::new("", "Orphan question", "2"),
            QuestionRecord::new("ML", "Define overfitting.", "2"),
            QuestionRecord::new("AI", "Explain A* search.", "10"),
            QuestionRecord::new("DBMS", "What is normalization?", "5"),
        ])
    }

    #[test]
    fn test_categories_first_seen_order() {
        let store = sample_store();
        assert_eq!(
            store.categories(),
            &["AI".to_string(), "ML".to_string(), "DBMS".to_string()]
        );
    }

    #[test]
    fn test_blank_categories_excluded() {
        let store = sample_store();
        assert!(!store.categories().iter().any(|c| c.trim().is_empty()));
        // The record itself is still in the table
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_category_len_case_insensitive() {
        let store = sample_store();
        assert_eq!(store.category_len("ai"), 2);
        assert_eq!(store.category_len("Ml"), 1);
        assert_eq!(store.category_len("nosuch"), 0);
    }
}
