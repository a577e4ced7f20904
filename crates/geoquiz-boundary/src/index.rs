//! Case-insensitive name index over boundary entities.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::info;

use crate::error::{BoundaryError, Result};
use crate::geojson::{BoundaryOptions, parse_feature_collection};
use crate::geometry::{Bounds, Polygon};

/// One named feature of the boundary dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryEntity {
    pub name: String,
    pub polygons: Vec<Polygon>,
    /// Feature properties other than the name.
    pub properties: Map<String, Value>,
}

impl BoundaryEntity {
    pub fn new(name: impl Into<String>, polygons: Vec<Polygon>) -> Self {
        Self {
            name: name.into(),
            polygons,
            properties: Map::new(),
        }
    }

    pub fn has_geometry(&self) -> bool {
        self.polygons.iter().any(|polygon| !polygon.is_empty())
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of_points(self.polygons.iter().flat_map(Polygon::points))
    }
}

/// Boundary entities keyed by lowercased name.
#[derive(Debug, Clone, Default)]
pub struct BoundaryIndex {
    entities: Vec<BoundaryEntity>,
    folded_names: Vec<String>,
}

impl BoundaryIndex {
    /// Loads a GeoJSON `FeatureCollection` from disk.
    pub fn load(path: &Path, options: &BoundaryOptions) -> Result<Self> {
        if !path.is_file() {
            return Err(BoundaryError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|e| BoundaryError::io(path, e))?;
        let entities = parse_feature_collection(&text, path, options)?;
        info!(
            path = %path.display(),
            features = entities.len(),
            "loaded boundary dataset"
        );
        Ok(Self::from_entities(entities))
    }

    pub fn from_entities(entities: Vec<BoundaryEntity>) -> Self {
        let folded_names = entities.iter().map(|e| e.name.to_lowercase()).collect();
        Self {
            entities,
            folded_names,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[BoundaryEntity] {
        &self.entities
    }

    /// First entity whose name equals `display_name`, ignoring case.
    pub fn find(&self, display_name: &str) -> Option<&BoundaryEntity> {
        let folded = display_name.to_lowercase();
        self.folded_names
            .iter()
            .position(|name| *name == folded)
            .map(|idx| &self.entities[idx])
    }

    /// Every entity whose name equals `display_name`, ignoring case.
    pub fn find_all(&self, display_name: &str) -> Vec<&BoundaryEntity> {
        let folded = display_name.to_lowercase();
        self.folded_names
            .iter()
            .zip(&self.entities)
            .filter(|(name, _)| **name == folded)
            .map(|(_, entity)| entity)
            .collect()
    }
}
