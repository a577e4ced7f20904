//! The rendering seam and its tiny-skia implementation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tiny_skia::{FillRule, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::debug;

use geoquiz_boundary::{BoundaryEntity, Bounds, Polygon};

use crate::error::RenderError;
use crate::projection::Projection;

/// Draws a set of boundary entities into an image file.
pub trait Renderer {
    /// Renders every polygon of `entities` into one image at `destination`.
    fn render(&self, entities: &[&BoundaryEntity], destination: &Path) -> Result<(), RenderError>;
}

/// Canvas geometry and stroke settings for [`OutlineRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Length in pixels of the longer side of the drawn geometry.
    pub size: u32,
    /// Transparent margin in pixels around the geometry.
    pub padding: u32,
    /// Outline width in pixels.
    pub outline_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 1024,
            padding: 16,
            outline_width: 2.0,
        }
    }
}

/// White silhouette with a thin dark outline on a transparent background.
#[derive(Debug, Clone, Default)]
pub struct OutlineRenderer {
    options: RenderOptions,
}

impl OutlineRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl Renderer for OutlineRenderer {
    fn render(&self, entities: &[&BoundaryEntity], destination: &Path) -> Result<(), RenderError> {
        let empty = || RenderError::EmptyGeometry {
            name: entities
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        };

        let polygons: Vec<&Polygon> = entities
            .iter()
            .flat_map(|entity| entity.polygons.iter())
            .filter(|polygon| !polygon.is_empty())
            .collect();
        let bounds = Bounds::of_points(polygons.iter().flat_map(|p| p.points())).ok_or_else(empty)?;
        let projection = Projection::fit(bounds, self.options.size, self.options.padding)
            .ok_or_else(empty)?;

        let mut builder = PathBuilder::new();
        for polygon in &polygons {
            for ring in polygon.rings.iter().filter(|ring| ring.len() >= 3) {
                let mut points = ring.iter().map(|point| projection.project(*point));
                if let Some((x, y)) = points.next() {
                    builder.move_to(x, y);
                }
                for (x, y) in points {
                    builder.line_to(x, y);
                }
                builder.close();
            }
        }
        let path = builder.finish().ok_or_else(empty)?;

        let mut pixmap =
            Pixmap::new(projection.width, projection.height).ok_or(RenderError::Canvas {
                width: projection.width,
                height: projection.height,
            })?;

        let mut fill = Paint::default();
        fill.set_color_rgba8(255, 255, 255, 255);
        fill.anti_alias = true;
        pixmap.fill_path(&path, &fill, FillRule::EvenOdd, Transform::identity(), None);

        let mut outline = Paint::default();
        outline.set_color_rgba8(0, 0, 0, 255);
        outline.anti_alias = true;
        let stroke = Stroke {
            width: self.options.outline_width,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &outline, &stroke, Transform::identity(), None);

        pixmap
            .save_png(destination)
            .map_err(|e| RenderError::Encode {
                path: destination.to_path_buf(),
                message: e.to_string(),
            })?;
        debug!(
            destination = %destination.display(),
            width = projection.width,
            height = projection.height,
            polygons = polygons.len(),
            "rendered outline"
        );
        Ok(())
    }
}
