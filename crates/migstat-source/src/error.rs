//! Error types for the source crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while collecting migration facts.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A migration file name carries a version outside the `u64` range.
    #[error("invalid migration version in {path}: {reason}")]
    InvalidVersion { path: PathBuf, reason: String },

    /// A ledger line could not be parsed as a version.
    #[error("invalid ledger entry at {path}:{line}: {reason}")]
    Ledger {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A JSON ledger could not be decoded.
    #[error("invalid JSON ledger {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Directory traversal failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// I/O error while reading a source.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
