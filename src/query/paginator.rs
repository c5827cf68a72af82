//! Fixed-size pagination over result sets.
//!
//! The paginator is a pure function over an ordered record slice: it never
//! holds state of its own. Cursor bookkeeping lives in the session.
//!
//! # Examples
//!
//! ```
//! use qbank::query::Paginator;
//! use qbank::store::QuestionRecord;
//!
//! let records: Vec<_> = (0..12)
//!     .map(|i| QuestionRecord::new("AI", format!("Question {i}?"), "5"))
//!     .collect();
//!
//! let paginator = Paginator::new();
//! let first = paginator.page(&records, 0);
//! assert!(first.has_more);
//! assert_eq!(first.remaining, 2);
//!
//! let second = paginator.page(&records, 10);
//! assert!(!second.has_more);
//! ```

use crate::store::record::QuestionRecord;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One rendered page of a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Rendered page text (header plus numbered entries), or the
    /// no-results message when the slice is empty.
    pub text: String,
    /// Whether more records remain past this page.
    pub has_more: bool,
    /// How many records remain past this page (0 when `has_more` is false).
    pub remaining: usize,
}

/// Slices ordered record sequences into fixed-size pages.
#[derive(Debug, Clone)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Create a paginator with the default page size of 10.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create a paginator with a custom page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Paginator {
            page_size: page_size.max(1),
        }
    }

    /// The configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Render the page starting at `cursor`.
    ///
    /// Entry numbering is 1-based and continues from `cursor + 1`, so later
    /// pages keep counting instead of resetting. The displayed page number
    /// is `cursor / page_size + 1`.
    pub fn page(&self, records: &[QuestionRecord], cursor: usize) -> Page {
        let end = (cursor + self.page_size).min(records.len());
        if cursor >= records.len() {
            return Page {
                text: "No questions found for this selection.".to_string(),
                has_more: false,
                remaining: 0,
            };
        }

        let mut text = format!("Questions (Page {}):\n\n", cursor / self.page_size + 1);
        for (offset, record) in records[cursor..end].iter().enumerate() {
            text.push_str(&format!(
                "{}. {} ({} marks)\n\n",
                cursor + offset + 1,
                record.question_text,
                record.marks
            ));
        }

        let remaining = records.len().saturating_sub(cursor + self.page_size);
        Page {
            text,
            has_more: remaining > 0,
            remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<QuestionRecord> {
        (0..n)
            .map(|i| QuestionRecord::new("AI", format!("Question {i}?"), "5"))
            .collect()
    }

    #[test]
    fn test_first_page_rendering() {
        let paginator = Paginator::new();
        let page = paginator.page(&records(15), 0);

        assert!(page.text.starts_with("Questions (Page 1):"));
        assert!(page.text.contains("1. Question 0? (5 marks)"));
        assert!(page.text.contains("10. Question 9? (5 marks)"));
        assert!(!page.text.contains("11."));
        assert!(page.has_more);
        assert_eq!(page.remaining, 5);
    }

    #[test]
    fn test_numbering_continues_across_pages() {
        let paginator = Paginator::new();
        let page = paginator.page(&records(15), 10);

        assert!(page.text.starts_with("Questions (Page 2):"));
        assert!(page.text.contains("11. Question 10? (5 marks)"));
        assert!(page.text.contains("15. Question 14? (5 marks)"));
        assert!(!page.has_more);
        assert_eq!(page.remaining, 0);
    }

    #[test]
    fn test_exact_page_boundary() {
        let paginator = Paginator::new();
        let page = paginator.page(&records(10), 0);

        assert!(!page.has_more);
        assert_eq!(page.remaining, 0);
    }

    #[test]
    fn test_empty_slice_message() {
        let paginator = Paginator::new();

        let page = paginator.page(&records(0), 0);
        assert_eq!(page.text, "No questions found for this selection.");
        assert!(!page.has_more);
        assert_eq!(page.remaining, 0);

        // Cursor past the end behaves the same.
        let page = paginator.page(&records(5), 10);
        assert_eq!(page.text, "No questions found for this selection.");
    }

    #[test]
    fn test_custom_page_size() {
        let paginator = Paginator::with_page_size(3);
        let page = paginator.page(&records(7), 3);

        assert!(page.text.starts_with("Questions (Page 2):"));
        assert!(page.text.contains("4. Question 3? (5 marks)"));
        assert!(page.has_more);
        assert_eq!(page.remaining, 1);
    }
}
