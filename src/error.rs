//! Error types for the Qbank library.
//!
//! All errors are represented by the [`QbankError`] enum. The conversational
//! core itself never fails on user input — malformed text degrades to an
//! informational reply — so these variants surface only at the loader and
//! CLI boundaries.
//!
//! # Examples
//!
//! ```
//! use qbank::error::{QbankError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(QbankError::dataset("missing questions column"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Qbank operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum QbankError {
    /// I/O errors (dataset files, terminal, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dataset-related errors (malformed records, empty tables, etc.)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// Session-related errors
    #[error("Session error: {0}")]
    Session(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with QbankError.
pub type Result<T> = std::result::Result<T, QbankError>;

impl QbankError {
    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        QbankError::Dataset(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        QbankError::Query(msg.into())
    }

    /// Create a new session error.
    pub fn session<S: Into<String>>(msg: S) -> Self {
        QbankError::Session(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        QbankError::Other(msg.into())
    }
}
