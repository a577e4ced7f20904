//! Rendering real PNG files.

use geoquiz_boundary::{BoundaryEntity, Point, Polygon};
use geoquiz_render::{OutlineRenderer, RenderError, RenderOptions, Renderer};
use tempfile::TempDir;
use tiny_skia::Pixmap;

fn square(name: &str) -> BoundaryEntity {
    BoundaryEntity::new(
        name,
        vec![Polygon::new(vec![vec![
            Point::new(0.0, -1.0),
            Point::new(2.0, -1.0),
            Point::new(2.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, -1.0),
        ]])],
    )
}

fn renderer() -> OutlineRenderer {
    OutlineRenderer::new(RenderOptions {
        size: 100,
        padding: 10,
        outline_width: 1.0,
    })
}

#[test]
fn writes_transparent_png_with_white_fill() {
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("square.png");
    let entity = square("Square");

    renderer().render(&[&entity], &destination).expect("render");

    let image = Pixmap::load_png(&destination).expect("decode png");
    assert_eq!((image.width(), image.height()), (120, 120));
    let corner = image.pixel(0, 0).unwrap();
    assert_eq!(corner.alpha(), 0);
    let center = image.pixel(60, 60).unwrap();
    assert_eq!(
        (center.red(), center.green(), center.blue(), center.alpha()),
        (255, 255, 255, 255)
    );
    let edge = image.pixel(10, 60).unwrap();
    assert!(edge.alpha() > 0);
    assert!(edge.red() < 200);
}

#[test]
fn entity_without_polygons_fails() {
    let dir = TempDir::new().unwrap();
    let entity = BoundaryEntity::new("Nowhere", Vec::new());
    let result = renderer().render(&[&entity], &dir.path().join("nowhere.png"));
    assert!(matches!(result, Err(RenderError::EmptyGeometry { name }) if name == "Nowhere"));
    assert!(!dir.path().join("nowhere.png").exists());
}

#[test]
fn unwritable_destination_fails() {
    let dir = TempDir::new().unwrap();
    let entity = square("Square");
    let destination = dir.path().join("missing-folder").join("square.png");
    let result = renderer().render(&[&entity], &destination);
    assert!(matches!(result, Err(RenderError::Encode { .. })));
}
