use std::collections::VecDeque;
use std::path::Path;

use image::RgbaImage;

use crate::client::ImageBackend;
use crate::consts::SIMULATION_EXPORT_FILENAME;
use crate::data_uri::decode_data_uri_image;
use crate::density::normalize_density;
use crate::error::{CellviewError, Result};
use crate::options::{density_visible, SimulationOptions};
use crate::render::save_png;
use crate::request::{SimulationForm, SimulationRequest, SimulationResponse};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A blocking message for the user (the desktop take on `alert()`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// What a finished submission did to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// New image drawn; the surface now has these natural dimensions.
    Rendered { width: u32, height: u32 },
    /// The server answered but the payload was not a decodable image.
    DecodeFailed,
    /// Transport or HTTP failure; one error notice was queued.
    Failed,
}

/// State behind the simulation panel.
pub struct PanelState {
    pub options: SimulationOptions,
    pub form: SimulationForm,
    /// The drawn result, sized to the image's natural dimensions.
    surface: Option<RgbaImage>,
    pub save_visible: bool,
    pub in_flight: bool,
    notices: VecDeque<Notice>,
}

impl PanelState {
    pub fn new(options: SimulationOptions) -> Self {
        if options.is_empty() {
            tracing::error!("simulation options are empty; dropdowns will be blank");
        }
        let form = SimulationForm::from_options(&options);
        Self {
            options,
            form,
            surface: None,
            save_visible: false,
            in_flight: false,
            notices: VecDeque::new(),
        }
    }

    pub fn surface(&self) -> Option<&RgbaImage> {
        self.surface.as_ref()
    }

    pub fn density_visible(&self) -> bool {
        density_visible(&self.form.init_method)
    }

    pub fn set_init_method(&mut self, method: &str) {
        self.form.init_method = method.to_string();
    }

    /// Run on change and on focus loss of the density field.
    pub fn commit_density(&mut self) {
        let normalized = normalize_density(&self.form.density);
        if normalized != self.form.density {
            tracing::debug!(from = %self.form.density, to = %normalized, "density corrected");
        }
        self.form.density = normalized;
    }

    /// Start a submission. Returns `None` while another one is in flight.
    pub fn begin_submit(&mut self) -> Option<SimulationRequest> {
        if self.in_flight {
            tracing::debug!("submission ignored, request already in flight");
            return None;
        }
        self.commit_density();
        self.in_flight = true;
        let request = self.form.to_request();
        tracing::info!(?request, "form submitted");
        Some(request)
    }

    /// Apply the backend's answer to the surface.
    pub fn finish_submit(&mut self, result: Result<SimulationResponse>) -> SubmitOutcome {
        self.in_flight = false;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("generation failed: {e}");
                self.notices.push_back(Notice {
                    kind: NoticeKind::Error,
                    message: format!("Error generating image: {e}"),
                });
                return SubmitOutcome::Failed;
            }
        };

        match decode_data_uri_image(&response.image_data) {
            Ok(image) => {
                let (width, height) = image.dimensions();
                tracing::info!(width, height, "image received, drawing to surface");
                self.surface = Some(image);
                self.save_visible = true;
                SubmitOutcome::Rendered { width, height }
            }
            Err(e) => {
                tracing::error!("failed to load image data: {e}");
                SubmitOutcome::DecodeFailed
            }
        }
    }

    /// Submit synchronously through `backend`.
    pub fn submit_with(&mut self, backend: &dyn ImageBackend) -> Option<SubmitOutcome> {
        let request = self.begin_submit()?;
        Some(self.finish_submit(backend.generate(&request)))
    }

    /// Write the surface as PNG and queue a notice naming the file.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        let surface = self.surface.as_ref().ok_or(CellviewError::NoImage)?;
        save_png(surface, path)?;
        self.notify_saved(path);
        Ok(())
    }

    /// Queue the confirmation for a PNG written elsewhere (e.g. by a worker).
    pub fn notify_saved(&mut self, path: &Path) {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| SIMULATION_EXPORT_FILENAME.to_string());
        let location = path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.notices.push_back(Notice {
            kind: NoticeKind::Info,
            message: format!("Image saved as: {filename}\nFolder: {location}"),
        });
    }

    pub fn pending_notices(&self) -> usize {
        self.notices.len()
    }

    pub fn peek_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Dismiss the oldest notice.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }
}
