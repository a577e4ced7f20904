use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce one outline image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no drawable geometry for {name}")]
    EmptyGeometry { name: String },

    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("failed to write {path}: {message}")]
    Encode { path: PathBuf, message: String },
}
