//! Intent classification module.
//!
//! This module maps normalized user utterances to a closed set of intents
//! plus extracted parameters. Matching is keyword/substring based — there
//! is deliberately no NLU here — and precedence between keyword families
//! is a first-class ordered rule table rather than incidental code order.

pub mod classifier;
#[allow(clippy::module_inception)]
pub mod intent;
pub mod rules;

// Re-export commonly used types
pub use classifier::IntentClassifier;
pub use intent::Intent;
pub use rules::{IntentRule, MatchKind, RuleAction, RULES};
