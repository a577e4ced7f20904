//! Database materialization of the country source.
//!
//! The source table is copied into SQLite with one inferred column per source
//! column plus an `image_path` column planned by
//! [`ArtifactPathPlanner`](geoquiz_model::ArtifactPathPlanner), the same
//! planner the map pipeline renders through.

mod error;
mod materialize;
mod preview;
mod schema;

pub use error::{DatabaseError, Result};
pub use materialize::{MaterializeJob, MaterializeReport, materialize, materialize_table};
pub use preview::{TablePreview, preview_table};
pub use schema::{ColumnDefinition, TableSchema, quote_identifier, sanitize_column_name};
