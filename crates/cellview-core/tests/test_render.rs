#[allow(dead_code)]
mod common;

use cellview_core::consts::BACKGROUND_RGBA;
use cellview_core::error::CellviewError;
use cellview_core::geometry::Point;
use cellview_core::render::{encode_png, load_image, save_png};
use cellview_core::view::ZoomDirection;
use cellview_core::viewer::ViewerWidget;
use tempfile::TempDir;

const RED: [u8; 4] = [255, 0, 0, 255];

fn viewer_with(width: u32, height: u32) -> ViewerWidget {
    let mut viewer = ViewerWidget::new();
    viewer.load(common::solid_image(width, height, RED));
    viewer
}

#[test]
fn test_export_without_image_fails() {
    let viewer = ViewerWidget::new();
    assert!(matches!(viewer.export(10, 10), Err(CellviewError::NoImage)));
}

#[test]
fn test_export_centres_image_on_background() {
    let viewer = viewer_with(4, 4);
    let surface = viewer.export(10, 10).unwrap();
    assert_eq!(surface.dimensions(), (10, 10));
    assert_eq!(surface.get_pixel(0, 0).0, BACKGROUND_RGBA);
    assert_eq!(surface.get_pixel(3, 3).0, RED);
    assert_eq!(surface.get_pixel(6, 6).0, RED);
    assert_eq!(surface.get_pixel(7, 7).0, BACKGROUND_RGBA);
}

#[test]
fn test_export_follows_pan() {
    let mut viewer = viewer_with(2, 2);
    viewer.press(Point::ZERO);
    viewer.drag(Point::new(3.0, 0.0));
    viewer.release();
    let surface = viewer.export(10, 10).unwrap();
    // Image spans x 7..9 after moving right by 3.
    assert_eq!(surface.get_pixel(4, 4).0, BACKGROUND_RGBA);
    assert_eq!(surface.get_pixel(7, 4).0, RED);
    assert_eq!(surface.get_pixel(8, 5).0, RED);
}

#[test]
fn test_export_follows_zoom() {
    let mut viewer = viewer_with(2, 2);
    for _ in 0..5 {
        viewer.zoom(ZoomDirection::In);
    }
    // Zoom ~2.0: the 2x2 image covers 4x4 pixels around the centre.
    let surface = viewer.export(10, 10).unwrap();
    assert_eq!(surface.get_pixel(3, 3).0, RED);
    assert_eq!(surface.get_pixel(6, 6).0, RED);
    assert_eq!(surface.get_pixel(1, 1).0, BACKGROUND_RGBA);
}

#[test]
fn test_translucent_pixels_blend_over_background() {
    let mut viewer = ViewerWidget::new();
    viewer.load(common::solid_image(10, 10, [255, 255, 255, 0]));
    let surface = viewer.export(10, 10).unwrap();
    assert_eq!(surface.get_pixel(5, 5).0, BACKGROUND_RGBA);
}

#[test]
fn test_png_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("canvas-image.png");
    let surface = viewer_with(3, 3).export(8, 6).unwrap();
    save_png(&surface, &path).unwrap();
    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded, surface);
}

#[test]
fn test_encoded_png_has_signature() {
    let bytes = encode_png(&common::solid_image(1, 1, RED)).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
