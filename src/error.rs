//! Error types for protogate operations.
//!
//! This module defines [`ProtogateError`], the fatal-abort taxonomy, and a
//! [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Rule violations are never errors: they flow through the report as
//!   classified diagnostics and only influence the exit status.
//! - `ProtogateError` is reserved for the fatal aborts: an unreadable or
//!   malformed candidate, or an unreachable or malformed baseline. These
//!   terminate the run with a distinct exit code and no partial report.

use thiserror::Error;

/// Fatal error type for protogate operations.
#[derive(Debug, Error)]
pub enum ProtogateError {
    /// The candidate document on stdin could not be decoded.
    #[error("failed to parse candidate protocol document: {0}")]
    CandidateParse(#[source] serde_json::Error),

    /// The baseline document could not be fetched.
    #[error("failed to fetch baseline protocol from {url}: {message}")]
    BaselineFetch { url: String, message: String },

    /// The baseline document was fetched but could not be decoded.
    #[error("failed to parse baseline protocol from {url}: {source}")]
    BaselineParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for protogate operations.
pub type Result<T> = std::result::Result<T, ProtogateError>;
