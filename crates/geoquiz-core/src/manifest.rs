//! The missing-countries manifest.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PipelineError, Result};

/// Writes `missing` one name per line, or removes the manifest when there is
/// nothing to report. Returns the path when a manifest was written.
pub fn sync_manifest(path: &Path, missing: &[String]) -> Result<Option<PathBuf>> {
    let manifest_error = |source: io::Error| PipelineError::Manifest {
        path: path.to_path_buf(),
        source,
    };

    if missing.is_empty() {
        match fs::remove_file(path) {
            Ok(()) => info!(manifest = %path.display(), "removed stale manifest"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(manifest_error(e)),
        }
        return Ok(None);
    }

    {
        let file = fs::File::create(path).map_err(manifest_error)?;
        let mut writer = BufWriter::new(file);
        for name in missing {
            writeln!(writer, "{name}").map_err(manifest_error)?;
        }
        writer.flush().map_err(manifest_error)?;
    }
    info!(
        manifest = %path.display(),
        missing = missing.len(),
        "wrote missing-countries manifest"
    );
    Ok(Some(path.to_path_buf()))
}

/// Reads a manifest back into its names. An absent manifest is empty.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text.lines().map(str::to_string).collect()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(PipelineError::Manifest {
            path: path.to_path_buf(),
            source,
        }),
    }
}
