//! Keyword-based intent classifier.
//!
//! The classifier lowercases and trims the input, then walks the
//! [`RULES`](crate::intent::rules::RULES) precedence table top to bottom.
//! Query intents additionally extract a category (by scanning the store's
//! category list) and, for marks queries, a numeric marks token.
//!
//! # Examples
//!
//! ```
//! use qbank::intent::{Intent, IntentClassifier};
//!
//! let classifier = IntentClassifier::new(vec!["AI".to_string(), "ML".to_string()]);
//!
//! assert_eq!(classifier.classify("Hello!"), Intent::Greeting);
//! assert_eq!(
//!     classifier.classify("important questions on AI"),
//!     Intent::ImportantQuestions { category: Some("AI".to_string()) }
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::intent::intent::Intent;
use crate::intent::rules::{RuleAction, RULES};
use crate::store::store::QuestionStore;

/// Leftmost `<digits> marks` token, with optional plural `s` and whitespace.
static MARKS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*marks?").expect("marks pattern is valid"));

/// Classifies raw user text into an [`Intent`].
///
/// The classifier is a pure function of the input text and the static
/// category list it was built with; it performs no I/O and holds no
/// conversational state.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    /// Known category names, in the dataset's enumeration order.
    categories: Vec<String>,
}

impl IntentClassifier {
    /// Create a classifier over the given category list.
    pub fn new(categories: Vec<String>) -> Self {
        IntentClassifier { categories }
    }

    /// Create a classifier from a store's category list.
    pub fn for_store(store: &QuestionStore) -> Self {
        Self::new(store.categories().to_vec())
    }

    /// Classify an utterance. Total: always produces an intent, with
    /// [`Intent::Unknown`] as the fallback.
    pub fn classify(&self, text: &str) -> Intent {
        let input = text.to_lowercase();
        let input = input.trim();

        for rule in RULES {
            if rule.matches(input) {
                let intent = self.construct(rule.action, input);
                trace!(input, ?intent, "rule matched");
                return intent;
            }
        }

        trace!(input, "no rule matched");
        Intent::Unknown
    }

    fn construct(&self, action: RuleAction, input: &str) -> Intent {
        match action {
            RuleAction::Farewell => Intent::Farewell,
            RuleAction::Greeting => Intent::Greeting,
            RuleAction::Identity => Intent::IdentityQuery,
            RuleAction::Role => Intent::RoleQuery,
            RuleAction::Mood => Intent::MoodQuery,
            RuleAction::Thanks => Intent::Thanks,
            RuleAction::Help => Intent::HelpRequest,
            RuleAction::Categories => Intent::ListCategories,
            RuleAction::Important => Intent::ImportantQuestions {
                category: self.scan_category(input),
            },
            RuleAction::Marks => Intent::MarksQuestions {
                category: self.scan_category(input),
                marks: extract_marks(input),
            },
        }
    }

    /// Find the first known category whose name appears in the input.
    ///
    /// Matching is case-insensitive substring containment, in the
    /// dataset's category-enumeration order. Known limitation, preserved
    /// deliberately: short category names can match inside unrelated words
    /// (e.g. "AI" inside "maintain").
    fn scan_category(&self, input: &str) -> Option<String> {
        self.categories
            .iter()
            .find(|category| {
                let category = category.trim();
                !category.is_empty() && input.contains(&category.to_lowercase())
            })
            .cloned()
    }
}

/// Extract the marks value from the leftmost `<digits> marks` token.
fn extract_marks(input: &str) -> Option<String> {
    MARKS_PATTERN
        .captures(input)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new(vec!["AI".to_string(), "ML".to_string(), "DBMS".to_string()])
    }

    #[test]
    fn test_greeting_with_trailing_text() {
        let c = classifier();
        assert_eq!(c.classify("hello"), Intent::Greeting);
        assert_eq!(c.classify("  Hello, can I ask something?  "), Intent::Greeting);
        assert_eq!(c.classify("hey what's up with exams"), Intent::Greeting);
    }

    #[test]
    fn test_greeting_beats_thanks() {
        // Precedence property: greeting is checked before thanks.
        let c = classifier();
        assert_eq!(c.classify("hello and thanks"), Intent::Greeting);
        assert_eq!(c.classify("hi, thank you so much"), Intent::Greeting);
    }

    #[test]
    fn test_farewell_is_exact_match() {
        let c = classifier();
        assert_eq!(c.classify("bye"), Intent::Farewell);
        assert_eq!(c.classify("  EXIT "), Intent::Farewell);
        // Containment is not enough for farewells.
        assert_ne!(c.classify("goodbye everyone"), Intent::Farewell);
    }

    #[test]
    fn test_conversational_intents() {
        let c = classifier();
        assert_eq!(c.classify("who are you"), Intent::IdentityQuery);
        assert_eq!(c.classify("what do you do"), Intent::RoleQuery);
        assert_eq!(c.classify("how are you today"), Intent::MoodQuery);
        assert_eq!(c.classify("dhanyavad!"), Intent::Thanks);
        assert_eq!(c.classify("i need some help"), Intent::HelpRequest);
        assert_eq!(c.classify("show me the categories"), Intent::ListCategories);
    }

    #[test]
    fn test_important_questions_with_category() {
        let c = classifier();
        assert_eq!(
            c.classify("important questions on AI"),
            Intent::ImportantQuestions {
                category: Some("AI".to_string())
            }
        );
        assert_eq!(
            c.classify("top questions in dbms please"),
            Intent::ImportantQuestions {
                category: Some("DBMS".to_string())
            }
        );
    }

    #[test]
    fn test_important_questions_without_category() {
        let c = classifier();
        assert_eq!(
            c.classify("important questions please"),
            Intent::ImportantQuestions { category: None }
        );
    }

    #[test]
    fn test_category_scan_first_match_wins() {
        // Both AI and ML appear; AI is first in enumeration order.
        let c = classifier();
        assert_eq!(
            c.classify("top questions on ai and ml"),
            Intent::ImportantQuestions {
                category: Some("AI".to_string())
            }
        );
    }

    #[test]
    fn test_marks_questions_full_extraction() {
        let c = classifier();
        assert_eq!(
            c.classify("5 marks questions in ML"),
            Intent::MarksQuestions {
                category: Some("ML".to_string()),
                marks: Some("5".to_string())
            }
        );
        // Plural and spacing variants
        assert_eq!(
            c.classify("give me 10marks questions for AI"),
            Intent::MarksQuestions {
                category: Some("AI".to_string()),
                marks: Some("10".to_string())
            }
        );
    }

    #[test]
    fn test_marks_questions_missing_parameters() {
        let c = classifier();
        assert_eq!(
            c.classify("marks questions in ML"),
            Intent::MarksQuestions {
                category: Some("ML".to_string()),
                marks: None
            }
        );
        assert_eq!(
            c.classify("5 marks questions"),
            Intent::MarksQuestions {
                category: None,
                marks: Some("5".to_string())
            }
        );
    }

    #[test]
    fn test_marks_extraction_is_leftmost() {
        assert_eq!(extract_marks("2 marks or 5 marks"), Some("2".to_string()));
        assert_eq!(extract_marks("no digits here marks"), None);
    }

    #[test]
    fn test_unknown_fallback() {
        let c = classifier();
        assert_eq!(c.classify("what is the weather like"), Intent::Unknown);
        assert_eq!(c.classify(""), Intent::Unknown);
    }

    #[test]
    fn test_classification_is_total_for_arbitrary_text() {
        let c = classifier();
        for input in ["!!!", "\u{1F4DA}\u{1F4DA}", "     ", "1234567890", "ai"] {
            // Must never panic, always produce some intent.
            let _ = c.classify(input);
        }
    }
}
