use image::RgbaImage;

use crate::error::{CellviewError, Result};
use crate::geometry::{ImageSize, Point};
use crate::render::render_surface;
use crate::view::{ControlState, ViewState, ZoomDirection};

/// Image viewer controller: owns the decoded image and its view state.
///
/// Instances are independent; a window may host as many as it likes.
#[derive(Default)]
pub struct ViewerWidget {
    image: Option<RgbaImage>,
    pub view: ViewState,
}

impl ViewerWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    /// Replace the displayed image and reset zoom and pan.
    pub fn load(&mut self, image: RgbaImage) {
        let size = ImageSize::of(&image);
        tracing::debug!(width = size.width, height = size.height, "viewer image loaded");
        self.view.load(size);
        self.image = Some(image);
    }

    /// Zoom by one step. Ignored while nothing is loaded, matching the
    /// disabled buttons.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        if self.image.is_some() {
            self.view.zoom(direction);
        }
    }

    pub fn reset(&mut self) {
        self.view.reset();
    }

    pub fn press(&mut self, at: Point) {
        self.view.begin_drag(at);
    }

    pub fn drag(&mut self, at: Point) -> bool {
        self.view.drag_to(at)
    }

    pub fn release(&mut self) {
        self.view.end_drag();
    }

    pub fn controls(&self) -> ControlState {
        self.view.controls()
    }

    /// Render what the surface currently shows at the given size.
    pub fn export(&self, width: u32, height: u32) -> Result<RgbaImage> {
        let image = self.image.as_ref().ok_or(CellviewError::NoImage)?;
        render_surface(image, &self.view, width, height)
    }
}
