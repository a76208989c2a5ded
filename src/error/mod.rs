//! Error handling for the mortality report pipeline.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Errors that can abort a report run
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A required input source is absent from the data directory
    #[error("Required input '{source_name}' not found (looked for {})", .path.display())]
    SourceNotFound {
        /// Logical name of the source
        source_name: String,
        /// Path that was checked first
        path: PathBuf,
    },

    /// A required column is absent after header harmonization
    #[error("Column '{column}' not found in source '{source_name}'")]
    ColumnNotFound {
        /// Logical name of the source
        source_name: String,
        /// Canonical column name
        column: String,
    },

    /// Error opening, reading or writing a file
    #[error("IO error at {}: {message}", .path.display())]
    Io {
        /// Human readable description of the failed operation
        message: String,
        /// Path involved in the failure
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Parquet error
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error converting report rows to or from Arrow
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error writing the JSON manifest
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ReportError {
    /// Create an IO error carrying the path it happened at
    pub fn io(message: impl Into<String>, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a column-not-found error
    pub fn column_not_found(source_name: &str, column: &str) -> Self {
        Self::ColumnNotFound {
            source_name: source_name.to_string(),
            column: column.to_string(),
        }
    }

    /// Whether this error came from a missing input source
    #[must_use]
    pub const fn is_missing_source(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }
}

impl From<serde_arrow::Error> for ReportError {
    fn from(error: serde_arrow::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
