use std::path::PathBuf;

use cellview_core::error::Result;
use cellview_core::request::{SimulationRequest, SimulationResponse};
use image::RgbaImage;

/// Which widget a PNG write belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveTarget {
    Viewer,
    Simulation,
}

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode a local image file for the viewer.
    LoadImageFile { path: PathBuf },

    /// POST the form payload to the generation endpoint.
    Submit { request: SimulationRequest },

    /// Encode and write a rendered surface.
    SavePng {
        image: RgbaImage,
        path: PathBuf,
        target: SaveTarget,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        path: PathBuf,
        image: RgbaImage,
    },

    /// The backend answered (or failed to).
    SubmitFinished {
        result: Result<SimulationResponse>,
    },

    PngSaved {
        path: PathBuf,
        target: SaveTarget,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
