//! Headerless loading: one display name per row, first column only.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

use super::source::check_source;

/// Reads the first column of every row as a bare display name.
///
/// Rows whose fields are all empty are skipped. Names are kept verbatim apart
/// from a leading UTF-8 BOM on the first row.
pub fn load_country_names(path: &Path) -> Result<Vec<String>> {
    check_source(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::parse(path, e))?;

    let mut names = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::parse(path, e))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let first = record.get(0).unwrap_or_default();
        let name = if names.is_empty() {
            first.strip_prefix('\u{feff}').unwrap_or(first)
        } else {
            first
        };
        names.push(name.to_string());
    }

    if names.is_empty() {
        return Err(IngestError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), count = names.len(), "loaded country names");
    Ok(names)
}
