//! Error types for the search library.

use thiserror::Error;

/// Result type alias used by the fallible search entry points.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors reported by the search entry points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The pattern has no bytes; there is nothing to align against the text.
    #[error("Invalid input: pattern must not be empty")]
    EmptyPattern,
}
