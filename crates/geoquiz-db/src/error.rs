//! Errors for database materialization.

use std::path::PathBuf;

use thiserror::Error;

use geoquiz_ingest::IngestError;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The source could not be loaded.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// SQLite rejected an operation.
    #[error("database error in {path}: {source}")]
    Sqlite {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The source columns cannot form a valid table.
    #[error("invalid table schema: {message}")]
    Schema { message: String },

    /// The database file to read does not exist.
    #[error("database not found: {path}")]
    NotFound { path: PathBuf },
}

impl DatabaseError {
    pub(crate) fn sqlite(path: impl Into<PathBuf>, source: rusqlite::Error) -> Self {
        Self::Sqlite {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
