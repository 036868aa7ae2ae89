//! Error types for loading and exporting synthesis reports.

use std::path::PathBuf;

/// Errors around report files. Parsing and normalization themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// No report file at the given path.
    #[error("synthesis report not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// I/O error reading the report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
