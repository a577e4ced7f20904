//! Error types for country source ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a country source file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file does not exist.
    #[error("source file not found: {path}")]
    NotFound { path: PathBuf },

    /// Source file exists but could not be read.
    #[error("failed to read source file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file has no data rows.
    #[error("source file is empty: {path}")]
    EmptyDataset { path: PathBuf },

    /// Malformed tabular content.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The configured display name column is not in the header.
    #[error("name column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A row has no value in the display name column.
    #[error("row {row} of {path} has no display name")]
    MissingDisplayName { row: usize, path: PathBuf },
}

impl IngestError {
    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
