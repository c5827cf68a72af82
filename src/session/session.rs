//! The per-conversation state machine.
//!
//! A [`ConversationSession`] is an explicitly owned value: the host passes
//! it into each turn, and nothing about it is process-global. It has two
//! states — `Idle` and `Paginating` — and every new turn resets pagination
//! unless that turn is an explicit "show more" control input (which is a
//! distinct call, never classified as an intent).
//!
//! Embedders serving multiple users must give each user their own session;
//! sharing one across users cross-talks pagination state.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use qbank::session::ConversationSession;
//! use qbank::store::{QuestionRecord, QuestionStore};
//!
//! let store = Arc::new(QuestionStore::new(vec![
//!     QuestionRecord::new("AI", "What is a perceptron?", "5"),
//! ]));
//! let mut session = ConversationSession::new(store);
//!
//! let reply = session.submit_turn("hello");
//! assert!(!reply.has_more);
//! assert!(session.request_more().is_none());
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::intent::classifier::IntentClassifier;
use crate::intent::intent::Intent;
use crate::query::paginator::{Page, Paginator};
use crate::query::resolver::{messages, QueryResolver, Resolution};
use crate::store::record::QuestionRecord;
use crate::store::store::QuestionStore;

/// What the shell/UI renders for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayMessage {
    /// The reply text or rendered page.
    pub text: String,
    /// Whether a "show more" continuation is available.
    pub has_more: bool,
    /// How many more records the next page would show, capped at the page
    /// size (an affordance count for button labeling).
    pub more_count: usize,
    /// Set on farewell: the shell should stop reading input. The session
    /// itself never exits the process.
    pub end_of_conversation: bool,
}

impl DisplayMessage {
    fn reply(text: String, end_of_conversation: bool) -> Self {
        DisplayMessage {
            text,
            has_more: false,
            more_count: 0,
            end_of_conversation,
        }
    }
}

/// Pagination state across turns.
#[derive(Debug, Clone)]
enum SessionState {
    /// No pending "show more" continuation.
    Idle,
    /// A result set is mid-pagination. `results` is a snapshot taken at
    /// query time; `cursor` marks the start of the next unseen page.
    Paginating {
        results: Vec<QuestionRecord>,
        cursor: usize,
        remaining: usize,
    },
}

/// The owner of pagination state for one user's ongoing interaction.
///
/// Orchestrates [`IntentClassifier`] → [`QueryResolver`] → [`Paginator`]
/// for each submitted turn.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    store: Arc<QuestionStore>,
    classifier: IntentClassifier,
    resolver: QueryResolver,
    paginator: Paginator,
    state: SessionState,
}

impl ConversationSession {
    /// Create a session over the given store with the default page size.
    pub fn new(store: Arc<QuestionStore>) -> Self {
        Self::with_paginator(store, Paginator::new())
    }

    /// Create a session with a custom page size.
    pub fn with_page_size(store: Arc<QuestionStore>, page_size: usize) -> Self {
        Self::with_paginator(store, Paginator::with_page_size(page_size))
    }

    fn with_paginator(store: Arc<QuestionStore>, paginator: Paginator) -> Self {
        let classifier = IntentClassifier::for_store(&store);
        ConversationSession {
            store,
            classifier,
            resolver: QueryResolver::new(),
            paginator,
            state: SessionState::Idle,
        }
    }

    /// Whether a "show more" continuation is pending.
    pub fn is_paginating(&self) -> bool {
        matches!(self.state, SessionState::Paginating { .. })
    }

    /// Process one user turn.
    ///
    /// Any turn discards an in-progress pagination: query intents replace
    /// it with a fresh result set (when non-empty), everything else drops
    /// the session back to `Idle`.
    pub fn submit_turn(&mut self, text: &str) -> DisplayMessage {
        let intent = self.classifier.classify(text);
        debug!(?intent, "turn classified");

        let end_of_conversation = matches!(intent, Intent::Farewell);
        let resolution = match self.resolver.resolve(&intent, &self.store) {
            Ok(resolution) => resolution,
            Err(e) => {
                // The resolver has no failing paths for user input; keep the
                // robustness contract anyway and degrade to the help hint.
                debug!(error = %e, "resolution failed");
                Resolution::Reply(messages::UNKNOWN.to_string())
            }
        };

        match resolution {
            Resolution::Reply(text) => {
                self.state = SessionState::Idle;
                DisplayMessage::reply(text, end_of_conversation)
            }
            Resolution::Results(results) => {
                let page = self.paginator.page(&results, 0);
                self.state = if page.has_more {
                    SessionState::Paginating {
                        results,
                        cursor: 0,
                        remaining: page.remaining,
                    }
                } else {
                    SessionState::Idle
                };
                self.message_for(page)
            }
        }
    }

    /// Serve the next page of the pending result set.
    ///
    /// Returns `None` while `Idle` — a "show more" with nothing pending is
    /// a no-op, never an error.
    pub fn request_more(&mut self) -> Option<DisplayMessage> {
        let SessionState::Paginating {
            results, cursor, ..
        } = &self.state
        else {
            return None;
        };

        let next_cursor = cursor + self.paginator.page_size();
        let page = self.paginator.page(results, next_cursor);
        debug!(
            cursor = next_cursor,
            has_more = page.has_more,
            "continuation page served"
        );

        if page.has_more {
            let remaining = page.remaining;
            if let SessionState::Paginating {
                cursor, remaining: r, ..
            } = &mut self.state
            {
                *cursor = next_cursor;
                *r = remaining;
            }
        } else {
            self.state = SessionState::Idle;
        }

        Some(self.message_for(page))
    }

    fn message_for(&self, page: Page) -> DisplayMessage {
        DisplayMessage {
            text: page.text,
            has_more: page.has_more,
            more_count: page.remaining.min(self.paginator.page_size()),
            end_of_conversation: false,
        }
    }
}
