//! Record type for the question bank table.

use serde::{Deserialize, Serialize};

/// A single row of the question bank: a category, the question text, and
/// the marks the question carries.
///
/// Records are immutable once loaded. `marks` is kept in its normalized
/// string form — the dataset stores marks inconsistently (integers, floats,
/// strings), and marks filters compare normalized strings, never numbers.
/// See [`crate::query::QueryResolver`] for the comparison contract.
///
/// # Examples
///
/// ```
/// use qbank::store::QuestionRecord;
///
/// let record = QuestionRecord::new("AI", "What is a perceptron?", "5");
/// assert_eq!(record.category, "AI");
/// assert_eq!(record.marks, "5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// The syllabus category this question belongs to (may be empty).
    pub category: String,
    /// The question text shown to the user.
    pub question_text: String,
    /// The marks value in normalized string form.
    pub marks: String,
}

impl QuestionRecord {
    /// Create a new record.
    pub fn new<C, Q, M>(category: C, question_text: Q, marks: M) -> Self
    where
        C: Into<String>,
        Q: Into<String>,
        M: Into<String>,
    {
        QuestionRecord {
            category: category.into(),
            question_text: question_text.into(),
            marks: marks.into(),
        }
    }
}
