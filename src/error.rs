//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum covering all error
//! cases in the library, following the pattern used by popular crates like
//! `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! The parser itself never fails on input shape: unmatchable text folds into
//! the preceding record and unparseable timestamps drop their candidate
//! record silently. Errors therefore only arise at the edges: reading input
//! files, writing export output, and CLI-level validation such as selecting
//! a participant who never appears in the chat.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A participant was selected who does not appear in the record set.
    ///
    /// Raised by CLI-level validation, never by the metric functions
    /// themselves (those are total over any record set).
    #[error("unknown participant '{name}' (not present in this chat)")]
    UnknownAuthor {
        /// The name that was requested.
        name: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatlensError {
    /// Convenience constructor for [`ChatlensError::UnknownAuthor`].
    pub fn unknown_author(name: impl Into<String>) -> Self {
        ChatlensError::UnknownAuthor { name: name.into() }
    }
}
