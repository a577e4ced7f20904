//! Map generation for the geoquiz outline set.
//!
//! The pipeline walks the source names in order, derives each destination
//! through the shared [`ArtifactPathPlanner`](geoquiz_model::ArtifactPathPlanner),
//! looks the name up in the [`BoundaryIndex`](geoquiz_boundary::BoundaryIndex)
//! and renders matches. Unmatched names and failed renders are collected into
//! the missing-countries manifest.
//!
//! # Example
//!
//! ```ignore
//! use geoquiz_core::{MapJob, generate_maps};
//!
//! let report = generate_maps(&MapJob::new("countries.csv", "countries.geojson"))?;
//! println!("{} rendered, {} missing", report.rendered_count(), report.missing.len());
//! ```

pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod state;

pub use error::{PipelineError, Result};
pub use manifest::{read_manifest, sync_manifest};
pub use pipeline::{MapGenerationPipeline, MapJob, MapOptions, MapReport, generate_maps};
pub use state::{CountryOutcome, CountryState};
