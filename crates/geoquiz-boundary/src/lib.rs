//! Boundary dataset loading and lookup.
//!
//! A [`BoundaryIndex`] holds every named polygon feature of a GeoJSON
//! `FeatureCollection` and answers case-insensitive exact name queries.

mod error;
mod geojson;
mod geometry;
mod index;

pub use error::{BoundaryError, Result};
pub use geojson::{BoundaryOptions, parse_feature_collection};
pub use geometry::{Bounds, Point, Polygon};
pub use index::{BoundaryEntity, BoundaryIndex};
