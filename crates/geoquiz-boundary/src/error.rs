use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a boundary dataset.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("boundary file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read boundary file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse boundary file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl BoundaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, BoundaryError>;
