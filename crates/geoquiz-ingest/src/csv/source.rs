//! Pre-flight checks shared by both loading modes.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Checks that the source exists, is UTF-8 and holds more than whitespace.
pub fn check_source(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;
    if !metadata.is_file() {
        return Err(IngestError::NotFound {
            path: path.to_path_buf(),
        });
    }
    validate_encoding(path)?;

    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;
    let body = bytes.strip_prefix(&UTF8_BOM).unwrap_or(&bytes);
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Rejects UTF-16 encoded files. A UTF-8 BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::io(path, e))?;
    if bytes_read == 2 && (buffer == [0xFF, 0xFE] || buffer == [0xFE, 0xFF]) {
        return Err(IngestError::parse(path, "UTF-16 encoded files are not supported"));
    }
    Ok(())
}
