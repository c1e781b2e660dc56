use std::fmt;

use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::geometry::{Affine2, ImageSize, Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Wheel convention: scrolling up (negative page delta) zooms in.
    pub fn from_wheel_delta(delta_y: f32) -> Self {
        if delta_y < 0.0 {
            Self::In
        } else {
            Self::Out
        }
    }

    /// Steps that take the zoom from one bound to the other; further steps are no-ops.
    pub fn steps_across_range() -> u32 {
        ((MAX_ZOOM - MIN_ZOOM) / ZOOM_STEP).ceil() as u32
    }
}

/// Enablement of the viewer controls plus the zoom label text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlState {
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub reset: bool,
    pub export: bool,
    pub zoom_label: String,
}

/// Pan/zoom state of one viewer surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Natural size of the loaded image, `None` until the first load.
    pub image_size: Option<ImageSize>,
    pub zoom: f32,
    /// Screen-space pan offset; unbounded.
    pub pan: Point,
    pub dragging: bool,
    drag_anchor: Point,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            image_size: None,
            zoom: 1.0,
            pan: Point::ZERO,
            dragging: false,
            drag_anchor: Point::ZERO,
        }
    }
}

impl ViewState {
    pub fn has_image(&self) -> bool {
        self.image_size.is_some()
    }

    /// Record a freshly decoded image and return to the default view.
    pub fn load(&mut self, size: ImageSize) {
        self.image_size = Some(size);
        self.dragging = false;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Point::ZERO;
    }

    pub fn zoom(&mut self, direction: ZoomDirection) {
        self.zoom = match direction {
            ZoomDirection::In => (self.zoom + ZOOM_STEP).min(MAX_ZOOM),
            ZoomDirection::Out => (self.zoom - ZOOM_STEP).max(MIN_ZOOM),
        };
    }

    pub fn begin_drag(&mut self, at: Point) {
        self.dragging = true;
        self.drag_anchor = at;
    }

    /// Move the pan by the cursor delta since the last event. Returns `true`
    /// when the view changed and needs a redraw.
    pub fn drag_to(&mut self, at: Point) -> bool {
        if !self.dragging {
            return false;
        }
        self.pan += at - self.drag_anchor;
        self.drag_anchor = at;
        true
    }

    /// Mouse release or the cursor leaving the surface.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn controls(&self) -> ControlState {
        let loaded = self.has_image();
        ControlState {
            zoom_in: loaded && self.zoom < MAX_ZOOM,
            zoom_out: loaded && self.zoom > MIN_ZOOM,
            reset: loaded,
            export: loaded,
            zoom_label: self.zoom_label(),
        }
    }

    pub fn zoom_label(&self) -> String {
        format!("Zoom: {:.0}%", self.zoom * 100.0)
    }

    /// Image-to-surface transform: centre, zoom, pan, then centre the image
    /// on the origin. Pan is divided by zoom so it stays in screen pixels.
    pub fn transform(&self, surface: Rect) -> Option<Affine2> {
        let size = self.image_size?;
        let center = surface.center();
        Some(
            Affine2::IDENTITY
                .translate(center.x, center.y)
                .scale(self.zoom)
                .translate(self.pan.x / self.zoom, self.pan.y / self.zoom)
                .translate(-(size.width as f32) / 2.0, -(size.height as f32) / 2.0),
        )
    }

    /// Where the image lands on the surface under the current transform.
    pub fn image_rect(&self, surface: Rect) -> Option<Rect> {
        let size = self.image_size?;
        let transform = self.transform(surface)?;
        let min = transform.apply(Point::ZERO);
        let max = transform.apply(Point::new(size.width as f32, size.height as f32));
        Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }
}

impl fmt::Display for ZoomDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => write!(f, "in"),
            Self::Out => write!(f, "out"),
        }
    }
}
