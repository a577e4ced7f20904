//! Errors that abort a map generation run.

use std::path::PathBuf;

use thiserror::Error;

use geoquiz_boundary::BoundaryError;
use geoquiz_ingest::IngestError;

/// Run-level failures. Per-country render failures are not errors; they end
/// up in the manifest.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    #[error("failed to create output folder {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to update manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
