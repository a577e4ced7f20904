//! In-memory representation of the country source table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inferred storage type of a source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
}

impl ColumnType {
    /// SQL type name used in column definitions.
    pub fn sql_type(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_type())
    }
}

/// A single cell of a country record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Null,
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Text form of the value; `None` for nulls.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Integer(v) => Some(v.to_string()),
            Self::Real(v) => Some(v.to_string()),
            Self::Text(v) => Some(v.clone()),
            Self::Null => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Null => f.write_str("NULL"),
        }
    }
}

/// Column name and inferred type, as read from the source header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub column_type: ColumnType,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// One row of the source dataset.
///
/// `cells` are aligned with the owning table's columns. The display name is
/// stored separately so callers never rely on column position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    display_name: String,
    cells: Vec<CellValue>,
}

impl CountryRecord {
    pub fn new(display_name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            display_name: display_name.into(),
            cells,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }
}

/// Typed country records loaded from a source file with a header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTable {
    pub columns: Vec<ColumnSpec>,
    /// Index into `columns` of the display name column.
    pub name_column: usize,
    pub records: Vec<CountryRecord>,
}

impl CountryTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn name_column(&self) -> &ColumnSpec {
        &self.columns[self.name_column]
    }

    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(CountryRecord::display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_types_map_to_sql() {
        assert_eq!(ColumnType::Integer.sql_type(), "INTEGER");
        assert_eq!(ColumnType::Real.sql_type(), "REAL");
        assert_eq!(ColumnType::Text.to_string(), "TEXT");
    }

    #[test]
    fn cell_text_forms() {
        assert_eq!(CellValue::Integer(7).as_text().as_deref(), Some("7"));
        assert_eq!(CellValue::Real(1.5).as_text().as_deref(), Some("1.5"));
        assert_eq!(CellValue::Null.as_text(), None);
        assert!(CellValue::Null.is_null());
    }
}
