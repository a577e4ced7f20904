//! Header-row loading into a typed country table.

use std::path::Path;

use polars::prelude::*;
use tracing::{debug, info};

use geoquiz_model::{ColumnSpec, CountryRecord, CountryTable, SourceOptions};

use crate::error::{IngestError, Result};
use crate::values::{any_to_cell, column_type_of};

use super::source::check_source;

/// Reads a CSV with a header row into a typed [`CountryTable`].
///
/// Column types are inferred from every row. The display name column is
/// `options.name_column` when set, otherwise the first column.
pub fn load_country_table(path: &Path, options: &SourceOptions) -> Result<CountryTable> {
    check_source(path)?;
    let df = read_frame(path)?;
    if df.height() == 0 {
        return Err(IngestError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    let columns: Vec<ColumnSpec> = df
        .get_columns()
        .iter()
        .map(|column| ColumnSpec::new(column.name().as_str(), column_type_of(column.dtype())))
        .collect();
    let name_column = resolve_name_column(&columns, options, path)?;
    debug!(
        path = %path.display(),
        columns = ?columns.iter().map(|c| format!("{} {}", c.name, c.column_type)).collect::<Vec<_>>(),
        name_column = %columns[name_column].name,
        "inferred source schema"
    );

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let mut cells = Vec::with_capacity(columns.len());
        for (column, spec) in df.get_columns().iter().zip(&columns) {
            let value = column.get(row).map_err(|e| IngestError::parse(path, e))?;
            cells.push(any_to_cell(value, spec.column_type));
        }
        let display_name = cells[name_column]
            .as_text()
            .ok_or_else(|| IngestError::MissingDisplayName {
                row: row + 1,
                path: path.to_path_buf(),
            })?;
        records.push(CountryRecord::new(display_name, cells));
    }

    info!(
        path = %path.display(),
        rows = records.len(),
        columns = columns.len(),
        "loaded country table"
    );
    Ok(CountryTable {
        columns,
        name_column,
        records,
    })
}

fn read_frame(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::parse(path, e))?
        .finish()
        .map_err(|e| IngestError::parse(path, e))
}

fn resolve_name_column(
    columns: &[ColumnSpec],
    options: &SourceOptions,
    path: &Path,
) -> Result<usize> {
    match &options.name_column {
        Some(wanted) => columns
            .iter()
            .position(|column| column.name == *wanted)
            .ok_or_else(|| IngestError::MissingColumn {
                column: wanted.clone(),
                path: path.to_path_buf(),
            }),
        None => Ok(0),
    }
}
