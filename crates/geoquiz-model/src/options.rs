//! Defaults and options shared by the map and database pipelines.

use serde::{Deserialize, Serialize};

/// Folder the outline images are written to.
pub const DEFAULT_OUTPUT_FOLDER: &str = "stylized_maps";
/// List of countries that produced no image.
pub const DEFAULT_MANIFEST_FILE: &str = "missing.txt";
/// SQLite database file.
pub const DEFAULT_DATABASE_FILE: &str = "geo_game_data.db";
/// Table holding the country rows.
pub const DEFAULT_TABLE_NAME: &str = "country_info";
/// Boundary feature property holding the country name.
pub const DEFAULT_NAME_PROPERTY: &str = "name";
/// Column appended to every materialized row.
pub const IMAGE_PATH_COLUMN: &str = "image_path";

/// How the materializer treats rows already present in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InsertMode {
    /// Keep the existing table and insert every row again.
    #[default]
    Append,
    /// Drop and recreate the table before inserting.
    Replace,
}

/// Options for loading the source table with a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOptions {
    /// Header of the display name column. `None` selects the first column.
    pub name_column: Option<String>,
}

impl SourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_column(mut self, column: impl Into<String>) -> Self {
        self.name_column = Some(column.into());
        self
    }
}
