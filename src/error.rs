//! Error types for ferro-cohort
//!
//! The aggregation engine itself never fails on malformed-but-well-typed
//! input; degenerate cases (empty collections, absent optional fields,
//! unresolvable lookups) yield zero-valued or empty results. `CohortError`
//! covers the fallible edges of the crate: JSON table loading and custom
//! patient-id policy construction.

use thiserror::Error;

/// Main error type for ferro-cohort operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CohortError {
    /// A custom patient-id suffix pattern failed to compile
    #[error("Invalid patient-id suffix pattern: {msg}")]
    InvalidPattern { msg: String },

    /// IO error (for table loading)
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON parsing error (for table loading)
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl From<std::io::Error> for CohortError {
    fn from(err: std::io::Error) -> Self {
        CohortError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CohortError {
    fn from(err: serde_json::Error) -> Self {
        CohortError::Json {
            msg: err.to_string(),
        }
    }
}

impl From<regex::Error> for CohortError {
    fn from(err: regex::Error) -> Self {
        CohortError::InvalidPattern {
            msg: err.to_string(),
        }
    }
}
