//! Fits geographic bounds onto a pixel canvas.

use geoquiz_boundary::{Bounds, Point};

/// Upper bound on the vertical stretch near the poles.
const MAX_ASPECT: f64 = 10.0;

/// Affine mapping from dataset coordinates to canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    min_x: f64,
    max_y: f64,
    scale: f64,
    aspect: f64,
    padding: f64,
    pub width: u32,
    pub height: u32,
}

impl Projection {
    /// Scales `bounds` so the longer side spans `size` pixels, with `padding`
    /// pixels of margin on every side. Returns `None` for a zero-area extent.
    pub fn fit(bounds: Bounds, size: u32, padding: u32) -> Option<Self> {
        let aspect = latitude_aspect(bounds);
        let span_x = bounds.width();
        let span_y = bounds.height() * aspect;
        let longest = span_x.max(span_y);
        if longest.is_nan() || longest <= 0.0 || size == 0 {
            return None;
        }
        let scale = f64::from(size) / longest;
        let padding = f64::from(padding);
        let width = (span_x * scale).ceil().max(1.0) + 2.0 * padding;
        let height = (span_y * scale).ceil().max(1.0) + 2.0 * padding;
        Some(Self {
            min_x: bounds.min_x,
            max_y: bounds.max_y,
            scale,
            aspect,
            padding,
            width: width as u32,
            height: height as u32,
        })
    }

    /// Pixel position of a point; y grows downwards.
    pub fn project(&self, point: Point) -> (f32, f32) {
        let x = (point.x - self.min_x) * self.scale + self.padding;
        let y = (self.max_y - point.y) * self.aspect * self.scale + self.padding;
        (x as f32, y as f32)
    }
}

/// Vertical stretch of `1 / cos(mid latitude)`, so outlines keep the
/// proportions they have on a map centred on the feature.
fn latitude_aspect(bounds: Bounds) -> f64 {
    let mid = ((bounds.min_y + bounds.max_y) / 2.0).to_radians();
    let cos = mid.cos();
    if cos <= 1.0 / MAX_ASPECT {
        MAX_ASPECT
    } else {
        1.0 / cos
    }
}
