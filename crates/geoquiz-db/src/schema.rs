//! Table definitions derived from the source columns.

use serde::{Deserialize, Serialize};

use geoquiz_model::{ColumnType, CountryTable, IMAGE_PATH_COLUMN};

use crate::error::{DatabaseError, Result};

/// Replaces spaces in a source header so it can serve as a column name.
pub fn sanitize_column_name(name: &str) -> String {
    name.replace(' ', "_")
}

/// Quotes an SQL identifier, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub column_type: ColumnType,
}

impl ColumnDefinition {
    fn sql(&self) -> String {
        format!("{} {}", quote_identifier(&self.name), self.column_type.sql_type())
    }
}

/// Table name plus column definitions, `image_path` last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub table: String,
    pub columns: Vec<ColumnDefinition>,
}

impl TableSchema {
    /// Builds the schema for `source`, failing on names that would collide
    /// once sanitized (SQLite compares column names case-insensitively).
    pub fn for_source(table: &str, source: &CountryTable) -> Result<Self> {
        if table.trim().is_empty() {
            return Err(DatabaseError::schema("table name is empty"));
        }
        let mut columns: Vec<ColumnDefinition> = Vec::with_capacity(source.columns.len() + 1);
        let derived = source
            .columns
            .iter()
            .map(|spec| ColumnDefinition {
                name: sanitize_column_name(&spec.name),
                column_type: spec.column_type,
            })
            .chain(std::iter::once(ColumnDefinition {
                name: IMAGE_PATH_COLUMN.to_string(),
                column_type: ColumnType::Text,
            }));
        for column in derived {
            if column.name.is_empty() {
                return Err(DatabaseError::schema("source has an empty column name"));
            }
            if let Some(existing) = columns
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(&column.name))
            {
                return Err(DatabaseError::schema(format!(
                    "column '{}' collides with '{}'",
                    column.name, existing.name
                )));
            }
            columns.push(column);
        }
        Ok(Self {
            table: table.to_string(),
            columns,
        })
    }

    pub fn create_sql(&self) -> String {
        let definitions: Vec<String> = self.columns.iter().map(ColumnDefinition::sql).collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({});",
            quote_identifier(&self.table),
            definitions.join(", ")
        )
    }

    pub fn drop_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {};", quote_identifier(&self.table))
    }

    pub fn insert_sql(&self) -> String {
        let names: Vec<String> = self
            .columns
            .iter()
            .map(|c| quote_identifier(&c.name))
            .collect();
        let placeholders = vec!["?"; self.columns.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({});",
            quote_identifier(&self.table),
            names.join(", "),
            placeholders
        )
    }
}
