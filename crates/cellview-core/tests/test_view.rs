#[allow(dead_code)]
mod common;

use approx::assert_relative_eq;

use cellview_core::consts::{MAX_ZOOM, MIN_ZOOM};
use cellview_core::geometry::{ImageSize, Point, Rect};
use cellview_core::view::{ViewState, ZoomDirection};
use cellview_core::viewer::ViewerWidget;

fn loaded_view() -> ViewState {
    let mut view = ViewState::default();
    view.load(ImageSize::new(200, 100));
    view
}

// ---------------------------------------------------------------------------
// Zoom bounds
// ---------------------------------------------------------------------------

#[test]
fn test_steps_across_range_reach_each_bound() {
    let steps = ZoomDirection::steps_across_range();
    assert_eq!(steps, 25);

    let mut view = loaded_view();
    for _ in 0..steps {
        view.zoom(ZoomDirection::In);
    }
    assert_relative_eq!(view.zoom, MAX_ZOOM);
    for _ in 0..steps {
        view.zoom(ZoomDirection::Out);
    }
    assert_relative_eq!(view.zoom, MIN_ZOOM);
}

#[test]
fn test_zoom_in_saturates_at_max() {
    let mut view = loaded_view();
    for _ in 0..100 {
        view.zoom(ZoomDirection::In);
    }
    assert_eq!(view.zoom, MAX_ZOOM);
    assert!(!view.controls().zoom_in);
    assert!(view.controls().zoom_out);
}

#[test]
fn test_zoom_out_saturates_at_min() {
    let mut view = loaded_view();
    for _ in 0..100 {
        view.zoom(ZoomDirection::Out);
    }
    assert_eq!(view.zoom, MIN_ZOOM);
    assert!(!view.controls().zoom_out);
    assert!(view.controls().zoom_in);
}

#[test]
fn test_zoom_stays_in_bounds_for_mixed_sequences() {
    let mut view = loaded_view();
    // Deterministic pseudo-random walk of directions.
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..5_000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let direction = if seed % 3 == 0 {
            ZoomDirection::Out
        } else {
            ZoomDirection::In
        };
        view.zoom(direction);
        assert!(view.zoom >= MIN_ZOOM && view.zoom <= MAX_ZOOM, "zoom {}", view.zoom);
    }
}

#[test]
fn test_single_zoom_step() {
    let mut view = loaded_view();
    view.zoom(ZoomDirection::In);
    assert_relative_eq!(view.zoom, 1.2, epsilon = 1e-6);
    view.zoom(ZoomDirection::Out);
    view.zoom(ZoomDirection::Out);
    assert_relative_eq!(view.zoom, 0.8, epsilon = 1e-6);
}

#[test]
fn test_wheel_direction() {
    assert_eq!(ZoomDirection::from_wheel_delta(-120.0), ZoomDirection::In);
    assert_eq!(ZoomDirection::from_wheel_delta(120.0), ZoomDirection::Out);
    assert_eq!(ZoomDirection::from_wheel_delta(0.0), ZoomDirection::Out);
}

// ---------------------------------------------------------------------------
// Load / reset
// ---------------------------------------------------------------------------

#[test]
fn test_load_resets_zoom_and_pan_exactly() {
    let mut view = loaded_view();
    view.zoom(ZoomDirection::In);
    view.zoom(ZoomDirection::In);
    view.begin_drag(Point::new(10.0, 10.0));
    view.drag_to(Point::new(47.0, -3.0));

    view.load(ImageSize::new(64, 64));

    assert_eq!(view.zoom, 1.0);
    assert_eq!(view.pan, Point::ZERO);
    assert!(!view.dragging);
    assert_eq!(view.image_size, Some(ImageSize::new(64, 64)));
}

#[test]
fn test_reset_restores_defaults() {
    let mut view = loaded_view();
    view.zoom(ZoomDirection::Out);
    view.begin_drag(Point::ZERO);
    view.drag_to(Point::new(5.0, 6.0));
    view.reset();
    assert_eq!(view.zoom, 1.0);
    assert_eq!(view.pan, Point::ZERO);
}

// ---------------------------------------------------------------------------
// Pan
// ---------------------------------------------------------------------------

#[test]
fn test_drag_accumulates_frame_deltas() {
    let mut view = loaded_view();
    view.begin_drag(Point::new(100.0, 100.0));
    assert!(view.drag_to(Point::new(110.0, 95.0)));
    assert!(view.drag_to(Point::new(120.0, 90.0)));
    assert_eq!(view.pan, Point::new(20.0, -10.0));
}

#[test]
fn test_move_without_drag_is_ignored() {
    let mut view = loaded_view();
    assert!(!view.drag_to(Point::new(50.0, 50.0)));
    assert_eq!(view.pan, Point::ZERO);
}

#[test]
fn test_drag_ends_on_release() {
    let mut view = loaded_view();
    view.begin_drag(Point::ZERO);
    view.end_drag();
    assert!(!view.drag_to(Point::new(30.0, 30.0)));
    assert_eq!(view.pan, Point::ZERO);
}

#[test]
fn test_pan_is_unbounded() {
    let mut view = loaded_view();
    view.begin_drag(Point::ZERO);
    view.drag_to(Point::new(-50_000.0, 90_000.0));
    assert_eq!(view.pan, Point::new(-50_000.0, 90_000.0));
}

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

#[test]
fn test_controls_disabled_without_image() {
    let view = ViewState::default();
    let controls = view.controls();
    assert!(!controls.zoom_in);
    assert!(!controls.zoom_out);
    assert!(!controls.reset);
    assert!(!controls.export);
    assert_eq!(controls.zoom_label, "Zoom: 100%");
}

#[test]
fn test_zoom_label_rounds_percent() {
    let mut view = loaded_view();
    view.zoom(ZoomDirection::In);
    assert_eq!(view.zoom_label(), "Zoom: 120%");
    for _ in 0..10 {
        view.zoom(ZoomDirection::Out);
    }
    assert_eq!(view.zoom_label(), "Zoom: 10%");
}

#[test]
fn test_widget_ignores_zoom_without_image() {
    let mut widget = ViewerWidget::new();
    widget.zoom(ZoomDirection::In);
    assert_eq!(widget.view.zoom, 1.0);
}

#[test]
fn test_independent_viewers() {
    let mut a = ViewerWidget::new();
    let mut b = ViewerWidget::new();
    a.load(common::solid_image(4, 4, [0, 0, 0, 255]));
    b.load(common::solid_image(8, 8, [0, 0, 0, 255]));
    a.zoom(ZoomDirection::In);
    assert_relative_eq!(a.view.zoom, 1.2, epsilon = 1e-6);
    assert_eq!(b.view.zoom, 1.0);
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

#[test]
fn test_transform_centres_image() {
    let view = loaded_view();
    let surface = Rect::new(0.0, 0.0, 800.0, 600.0);
    let rect = view.image_rect(surface).unwrap();
    assert_relative_eq!(rect.x, 300.0);
    assert_relative_eq!(rect.y, 250.0);
    assert_relative_eq!(rect.width, 200.0);
    assert_relative_eq!(rect.height, 100.0);
}

#[test]
fn test_zoom_scales_about_surface_centre() {
    let mut view = loaded_view();
    view.zoom(ZoomDirection::In);
    let surface = Rect::new(0.0, 0.0, 800.0, 600.0);
    let rect = view.image_rect(surface).unwrap();
    assert_relative_eq!(rect.center().x, 400.0, epsilon = 1e-3);
    assert_relative_eq!(rect.center().y, 300.0, epsilon = 1e-3);
    assert_relative_eq!(rect.width, 240.0, epsilon = 1e-3);
}

#[test]
fn test_pan_is_screen_space_regardless_of_zoom() {
    let mut view = loaded_view();
    for _ in 0..5 {
        view.zoom(ZoomDirection::In);
    }
    view.begin_drag(Point::ZERO);
    view.drag_to(Point::new(30.0, -20.0));

    let surface = Rect::new(0.0, 0.0, 800.0, 600.0);
    let transform = view.transform(surface).unwrap();
    let centre = transform.apply(Point::new(100.0, 50.0));
    assert_relative_eq!(centre.x, 430.0, epsilon = 1e-3);
    assert_relative_eq!(centre.y, 280.0, epsilon = 1e-3);
}

#[test]
fn test_transform_requires_image() {
    let view = ViewState::default();
    assert!(view.transform(Rect::new(0.0, 0.0, 10.0, 10.0)).is_none());
}

#[test]
fn test_inverse_round_trips_points() {
    let mut view = loaded_view();
    view.zoom(ZoomDirection::In);
    view.begin_drag(Point::ZERO);
    view.drag_to(Point::new(12.0, 7.0));
    let transform = view.transform(Rect::new(0.0, 0.0, 640.0, 480.0)).unwrap();
    let inverse = transform.inverse().unwrap();
    let p = Point::new(33.0, 71.0);
    let back = inverse.apply(transform.apply(p));
    assert_relative_eq!(back.x, p.x, epsilon = 1e-3);
    assert_relative_eq!(back.y, p.y, epsilon = 1e-3);
}
