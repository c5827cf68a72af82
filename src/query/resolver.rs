//! Intent resolution against the question store.
//!
//! The resolver turns an [`Intent`] into a [`Resolution`]: either a plain
//! reply string (conversational intents, guidance for missing parameters,
//! terminal no-result messages) or a materialized result set ready for
//! pagination. It never fails on user input — every degraded case maps to
//! an informational reply.

use std::collections::HashSet;

use tracing::debug;

use crate::error::Result;
use crate::intent::intent::Intent;
use crate::store::record::QuestionRecord;
use crate::store::store::QuestionStore;

/// Canned reply texts for conversational intents.
pub mod messages {
    pub const GREETING: &str = "Hey there! Hope you're doing great. How can I help you today?";
    pub const IDENTITY: &str =
        "I'm your Question Bank Assistant, created to help you with important exam questions!";
    pub const ROLE: &str =
        "I'm here to assist you by providing important and categorized questions from your syllabus.";
    pub const MOOD: &str = "I'm great! Thanks for asking. How can I assist you today?";
    pub const THANKS: &str =
        "You're welcome! Happy to help. Wishing you success in your studies.";
    pub const HELP: &str = "You can ask me things like:\n\
        - 'important questions on [category]'\n\
        - '[number] marks questions in [category]'\n\
        - 'categories' to see available categories\n\
        - or just say 'bye' to exit.";
    pub const FAREWELL: &str = "Goodbye! Wishing you the best for your exams.";
    pub const UNKNOWN: &str = "I'm not sure what you mean. Type 'help' to see what you can ask me.";
    pub const MISSING_CATEGORY: &str = "Please mention a valid category like 'AI' or 'ML'.";
    pub const MISSING_CATEGORY_OR_MARKS: &str =
        "Please mention a valid category like 'AI' or 'ML', along with marks.";
}

/// The outcome of resolving one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A complete reply; no pagination applies.
    Reply(String),
    /// A materialized result set for the session to paginate.
    Results(Vec<QuestionRecord>),
}

/// Resolves intents into replies or result sets.
///
/// Result sets are deduplicated by question text, keeping the first
/// occurrence in dataset order, so a user never sees the same question
/// twice within one filtered set.
#[derive(Debug, Clone, Default)]
pub struct QueryResolver;

impl QueryResolver {
    /// Create a new resolver.
    pub fn new() -> Self {
        QueryResolver
    }

    /// Resolve an intent against the store.
    pub fn resolve(&self, intent: &Intent, store: &QuestionStore) -> Result<Resolution> {
        let resolution = match intent {
            Intent::Farewell => Resolution::Reply(messages::FAREWELL.to_string()),
            Intent::Greeting => Resolution::Reply(messages::GREETING.to_string()),
            Intent::IdentityQuery => Resolution::Reply(messages::IDENTITY.to_string()),
            Intent::RoleQuery => Resolution::Reply(messages::ROLE.to_string()),
            Intent::MoodQuery => Resolution::Reply(messages::MOOD.to_string()),
            Intent::Thanks => Resolution::Reply(messages::THANKS.to_string()),
            Intent::HelpRequest => Resolution::Reply(messages::HELP.to_string()),
            Intent::ListCategories => Resolution::Reply(format!(
                "Available categories are: {}",
                store.categories().join(", ")
            )),
            Intent::ImportantQuestions { category: None } => {
                Resolution::Reply(messages::MISSING_CATEGORY.to_string())
            }
            Intent::ImportantQuestions {
                category: Some(category),
            } => {
                let results = filter_by_category(store, category);
                debug!(%category, hits = results.len(), "important questions query");
                Resolution::Results(results)
            }
            Intent::MarksQuestions {
                category: Some(category),
                marks: Some(marks),
            } => {
                let results = filter_by_category_and_marks(store, category, marks);
                debug!(%category, %marks, hits = results.len(), "marks query");
                if results.is_empty() {
                    // Terminal message, distinct from the empty-page text.
                    Resolution::Reply(format!(
                        "No {marks} marks questions found in {category} category."
                    ))
                } else {
                    Resolution::Results(results)
                }
            }
            Intent::MarksQuestions { .. } => {
                Resolution::Reply(messages::MISSING_CATEGORY_OR_MARKS.to_string())
            }
            Intent::Unknown => Resolution::Reply(messages::UNKNOWN.to_string()),
        };

        Ok(resolution)
    }
}

/// Records matching the category (case-insensitive), deduplicated by
/// question text, in dataset order.
fn filter_by_category(store: &QuestionStore, category: &str) -> Vec<QuestionRecord> {
    dedup_by_question(
        store
            .records()
            .iter()
            .filter(|r| r.category.eq_ignore_ascii_case(category)),
    )
}

/// Records matching the category and the normalized marks string.
///
/// Marks comparison is decimal string equality, never numeric: "5" matches
/// "5" and "5.0" matches "5.0", but "5" never matches "5.0". The loader's
/// normalization pins both sides to the same form.
fn filter_by_category_and_marks(
    store: &QuestionStore,
    category: &str,
    marks: &str,
) -> Vec<QuestionRecord> {
    dedup_by_question(store.records().iter().filter(|r| {
        r.category.eq_ignore_ascii_case(category) && r.marks.trim() == marks.trim()
    }))
}

/// Keep the first occurrence of each question text, preserving order.
fn dedup_by_question<'a, I>(records: I) -> Vec<QuestionRecord>
where
    I: Iterator<Item = &'a QuestionRecord>,
{
    let mut seen = HashSet::new();
    records
        .filter(|r| seen.insert(r.question_text.clone()))
        .cloned()
        .collect()
}
