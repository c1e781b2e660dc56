use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use cellview_core::render::{load_image, save_png};
use image::RgbaImage;

use crate::messages::{SaveTarget, WorkerResult};

use super::{send, send_error, send_log};

pub(super) fn handle_load_image_file(
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    match load_image(path) {
        Ok(image) => {
            tracing::info!(
                path = %path.display(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "image decoded"
            );
            send(
                tx,
                ctx,
                WorkerResult::ImageLoaded {
                    path: path.to_path_buf(),
                    image,
                },
            );
        }
        Err(e) => {
            tracing::error!("failed to load {}: {e}", path.display());
            send_error(tx, ctx, format!("Failed to load image: {e}"));
        }
    }
}

pub(super) fn handle_save_png(
    image: &RgbaImage,
    path: &Path,
    target: SaveTarget,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match save_png(image, path) {
        Ok(()) => {
            send_log(tx, ctx, format!("Saved to {}", path.display()));
            send(
                tx,
                ctx,
                WorkerResult::PngSaved {
                    path: path.to_path_buf(),
                    target,
                },
            );
        }
        Err(e) => send_error(tx, ctx, format!("Failed to save: {e}")),
    }
}
