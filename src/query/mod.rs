//! Query resolution and pagination module.
//!
//! Given a classified intent, the resolver produces either a canned reply
//! or a filtered, deduplicated, ordered result set from the store. The
//! paginator then slices result sets into fixed-size pages.

pub mod paginator;
pub mod resolver;

// Re-export commonly used types
pub use paginator::{Page, Paginator, DEFAULT_PAGE_SIZE};
pub use resolver::{QueryResolver, Resolution};
