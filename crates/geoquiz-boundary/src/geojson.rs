//! GeoJSON `FeatureCollection` parsing.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use geoquiz_model::DEFAULT_NAME_PROPERTY;

use crate::error::{BoundaryError, Result};
use crate::geometry::{Point, Polygon};
use crate::index::BoundaryEntity;

/// Options for reading a boundary dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryOptions {
    /// Feature property holding the country name.
    pub name_property: String,
}

impl Default for BoundaryOptions {
    fn default() -> Self {
        Self {
            name_property: DEFAULT_NAME_PROPERTY.to_string(),
        }
    }
}

impl BoundaryOptions {
    pub fn with_name_property(mut self, property: impl Into<String>) -> Self {
        self.name_property = property.into();
        self
    }
}

#[derive(Deserialize)]
struct FeatureCollectionDoc {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<FeatureDoc>,
}

#[derive(Deserialize)]
struct FeatureDoc {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Value>,
}

type Position = Vec<f64>;

/// Parses GeoJSON text into boundary entities, in feature order.
///
/// `path` is only used for error messages. Features without a string name
/// property are skipped. Geometries other than `Polygon` and `MultiPolygon`
/// yield an entity without polygons.
pub fn parse_feature_collection(
    text: &str,
    path: &Path,
    options: &BoundaryOptions,
) -> Result<Vec<BoundaryEntity>> {
    let doc: FeatureCollectionDoc =
        serde_json::from_str(text).map_err(|e| parse_error(path, e))?;
    if doc.kind != "FeatureCollection" {
        return Err(parse_error(
            path,
            format!("expected a FeatureCollection, found '{}'", doc.kind),
        ));
    }

    let mut entities = Vec::with_capacity(doc.features.len());
    for (position, feature) in doc.features.into_iter().enumerate() {
        let mut properties = feature.properties.unwrap_or_default();
        let name = match properties.remove(&options.name_property) {
            Some(Value::String(name)) => name,
            _ => {
                debug!(
                    feature = position,
                    property = %options.name_property,
                    "skipping feature without a name"
                );
                continue;
            }
        };
        let polygons = match feature.geometry {
            Some(geometry) => read_geometry(geometry, path)?,
            None => Vec::new(),
        };
        entities.push(BoundaryEntity {
            name,
            polygons,
            properties,
        });
    }
    Ok(entities)
}

fn read_geometry(geometry: Value, path: &Path) -> Result<Vec<Polygon>> {
    let Value::Object(mut object) = geometry else {
        return Err(parse_error(path, "geometry is not an object"));
    };
    let kind = object
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let coordinates = object.remove("coordinates").unwrap_or(Value::Null);
    match kind.as_str() {
        "Polygon" => {
            let rings: Vec<Vec<Position>> =
                serde_json::from_value(coordinates).map_err(|e| parse_error(path, e))?;
            Ok(vec![to_polygon(rings, path)?])
        }
        "MultiPolygon" => {
            let polygons: Vec<Vec<Vec<Position>>> =
                serde_json::from_value(coordinates).map_err(|e| parse_error(path, e))?;
            polygons
                .into_iter()
                .map(|rings| to_polygon(rings, path))
                .collect()
        }
        other => {
            debug!(geometry = other, "ignoring non-polygon geometry");
            Ok(Vec::new())
        }
    }
}

fn to_polygon(rings: Vec<Vec<Position>>, path: &Path) -> Result<Polygon> {
    let rings = rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .map(|position| match position.as_slice() {
                    [x, y, ..] => Ok(Point::new(*x, *y)),
                    _ => Err(parse_error(path, "position has fewer than two coordinates")),
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(rings))
}

fn parse_error(path: &Path, message: impl ToString) -> BoundaryError {
    BoundaryError::Parse {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<BoundaryEntity>> {
        parse_feature_collection(text, Path::new("test.geojson"), &BoundaryOptions::default())
    }

    #[test]
    fn reads_polygon_and_multipolygon() {
        let entities = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"name":"Square","iso":"SQ"},
                 "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}},
                {"type":"Feature","properties":{"name":"Islands"},
                 "geometry":{"type":"MultiPolygon","coordinates":[
                    [[[0,0,5],[1,0,5],[1,1,5],[0,0,5]]],
                    [[[2,2],[3,2],[3,3],[2,2]]]]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "Square");
        assert_eq!(entities[0].polygons[0].rings[0].len(), 5);
        assert_eq!(entities[0].properties.get("iso"), Some(&Value::from("SQ")));
        assert_eq!(entities[1].polygons.len(), 2);
        assert_eq!(entities[1].polygons[0].rings[0][1], Point::new(1.0, 0.0));
    }

    #[test]
    fn skips_unnamed_features_and_keeps_other_geometries_empty() {
        let entities = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"name":null},"geometry":null},
                {"type":"Feature","properties":{},"geometry":null},
                {"type":"Feature","properties":{"name":"Dot"},
                 "geometry":{"type":"Point","coordinates":[1,2]}},
                {"type":"Feature","properties":{"name":"Nothing"},"geometry":null}
            ]}"#,
        )
        .unwrap();
        let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Dot", "Nothing"]);
        assert!(entities.iter().all(|e| e.polygons.is_empty()));
    }

    #[test]
    fn custom_name_property() {
        let entities = parse_feature_collection(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"ADMIN":"Chad"},"geometry":null}]}"#,
            Path::new("test.geojson"),
            &BoundaryOptions::default().with_name_property("ADMIN"),
        )
        .unwrap();
        assert_eq!(entities[0].name, "Chad");
    }

    #[test]
    fn rejects_non_collections_and_bad_positions() {
        assert!(matches!(
            parse(r#"{"type":"Feature","properties":{}}"#),
            Err(BoundaryError::Parse { .. })
        ));
        assert!(matches!(
            parse("not json"),
            Err(BoundaryError::Parse { .. })
        ));
        assert!(matches!(
            parse(
                r#"{"type":"FeatureCollection","features":[
                    {"type":"Feature","properties":{"name":"Bad"},
                     "geometry":{"type":"Polygon","coordinates":[[[0]]]}}]}"#
            ),
            Err(BoundaryError::Parse { .. })
        ));
    }
}
