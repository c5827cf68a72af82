//! Question store module.
//!
//! This module provides the read-only in-memory view over the question
//! bank dataset, the record type it is made of, and the loader that
//! materializes it from disk.

pub mod loader;
pub mod record;
#[allow(clippy::module_inception)]
pub mod store;

// Re-export commonly used types
pub use loader::load_dataset;
pub use record::QuestionRecord;
pub use store::QuestionStore;
