//! Conversation session module.
//!
//! This module owns the per-conversation pagination state and orchestrates
//! classification, resolution, and pagination for each turn.

#[allow(clippy::module_inception)]
pub mod session;

// Re-export commonly used types
pub use session::{ConversationSession, DisplayMessage};
