use std::sync::mpsc;
use std::sync::Arc;

use cellview_core::client::ImageBackend;

use crate::messages::{WorkerCommand, WorkerResult};

use super::{io, simulation};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    backend: Arc<dyn ImageBackend>,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("cellview-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, backend, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    backend: Arc<dyn ImageBackend>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImageFile { path } => {
                io::handle_load_image_file(&path, &tx, &ctx);
            }
            WorkerCommand::Submit { request } => {
                simulation::handle_submit(backend.as_ref(), &request, &tx, &ctx);
            }
            WorkerCommand::SavePng {
                image,
                path,
                target,
            } => {
                io::handle_save_png(&image, &path, target, &tx, &ctx);
            }
        }
    }
    tracing::debug!("worker channel closed, exiting");
}
