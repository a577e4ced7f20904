//! Read-back of a materialized table.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use serde::{Deserialize, Serialize};

use geoquiz_model::CellValue;

use crate::error::{DatabaseError, Result};
use crate::schema::quote_identifier;

/// First rows of a table, with its column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Reads up to `limit` rows of `table` in rowid order.
pub fn preview_table(database: &Path, table: &str, limit: usize) -> Result<TablePreview> {
    if !database.exists() {
        return Err(DatabaseError::NotFound {
            path: database.to_path_buf(),
        });
    }
    let sqlite = |e: rusqlite::Error| DatabaseError::sqlite(database, e);
    let conn = Connection::open_with_flags(database, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(sqlite)?;

    let sql = format!(
        "SELECT * FROM {} ORDER BY rowid LIMIT ?1",
        quote_identifier(table)
    );
    let mut stmt = conn.prepare(&sql).map_err(sqlite)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);

    let rows = stmt
        .query_map([limit], |row| {
            (0..width)
                .map(|i| row.get_ref(i).map(value_to_cell))
                .collect::<rusqlite::Result<Vec<_>>>()
        })
        .map_err(sqlite)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(sqlite)?;

    Ok(TablePreview { columns, rows })
}

fn value_to_cell(value: ValueRef<'_>) -> CellValue {
    match value {
        ValueRef::Null => CellValue::Null,
        ValueRef::Integer(v) => CellValue::Integer(v),
        ValueRef::Real(v) => CellValue::Real(v),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            CellValue::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
