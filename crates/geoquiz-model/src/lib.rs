//! Shared data model for the geoquiz outline pipeline.
//!
//! The naming module is the contract between the database materializer and
//! the map renderer: both derive image paths through [`ArtifactPathPlanner`],
//! so a row's `image_path` always names the file the renderer writes.

pub mod naming;
pub mod options;
pub mod record;

pub use naming::{ArtifactPathPlanner, CanonicalIdentifier, IMAGE_EXTENSION, canonicalize};
pub use options::{
    DEFAULT_DATABASE_FILE, DEFAULT_MANIFEST_FILE, DEFAULT_NAME_PROPERTY, DEFAULT_OUTPUT_FOLDER,
    DEFAULT_TABLE_NAME, IMAGE_PATH_COLUMN, InsertMode, SourceOptions,
};
pub use record::{CellValue, ColumnSpec, ColumnType, CountryRecord, CountryTable};
