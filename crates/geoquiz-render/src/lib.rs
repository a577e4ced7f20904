//! Outline rendering for matched boundary entities.
//!
//! [`Renderer`] is the seam the map pipeline renders through;
//! [`OutlineRenderer`] is the tiny-skia implementation that draws a white,
//! dark-outlined silhouette on a transparent canvas cropped to the geometry.

mod error;
mod projection;
mod renderer;

pub use error::RenderError;
pub use projection::Projection;
pub use renderer::{OutlineRenderer, RenderOptions, Renderer};
