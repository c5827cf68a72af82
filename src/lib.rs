//! # Qbank
//!
//! A conversational assistant over an exam question bank.
//!
//! Qbank classifies free-text utterances into a small set of intents,
//! resolves query intents against an in-memory table of
//! `(category, question, marks)` records, and serves paginated result
//! sets across conversational turns.
//!
//! ## Features
//!
//! - Keyword-based intent classification with a fixed precedence table
//! - Category and marks filters with stable first-occurrence deduplication
//! - Stateful "show more" pagination owned by an explicit session value
//! - Schema-light dataset loading (JSON / JSONL)

pub mod cli;
pub mod error;
pub mod intent;
pub mod query;
pub mod session;
pub mod store;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
