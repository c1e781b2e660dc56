use std::sync::mpsc;
use std::time::Instant;

use cellview_core::client::ImageBackend;
use cellview_core::request::SimulationRequest;

use crate::messages::WorkerResult;

use super::send;

pub(super) fn handle_submit(
    backend: &dyn ImageBackend,
    request: &SimulationRequest,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    let result = backend.generate(request);
    tracing::info!(
        ok = result.is_ok(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generation request finished"
    );
    send(tx, ctx, WorkerResult::SubmitFinished { result });
}
