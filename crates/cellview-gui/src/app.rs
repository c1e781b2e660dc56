use std::sync::mpsc;
use std::sync::Arc;

use cellview_core::client::HttpBackend;
use cellview_core::options::SimulationOptions;
use cellview_core::panel::{PanelState, SubmitOutcome};
use cellview_core::prefs::FileStore;
use cellview_core::tabs::TabSet;
use cellview_core::theme::Theme;

use crate::convert::rgba_to_color_image;
use crate::messages::{SaveTarget, WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{SimulationView, UIState, ViewerState};
use crate::workers;
use crate::GuiArgs;

pub const SIMULATION_TAB: &str = "simulation";
pub const VIEWER_TAB: &str = "viewer";

pub struct CellviewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewer: ViewerState,
    pub panel: PanelState,
    pub simulation: SimulationView,
    pub tabs: TabSet,
    pub theme: Theme,
    pub prefs: FileStore,
    pub server_url: String,
}

impl CellviewApp {
    pub fn new(ctx: &egui::Context, args: GuiArgs) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let backend = HttpBackend::new(args.server);
        let server_url = backend.base_url().to_string();
        let cmd_tx = workers::spawn_worker(Arc::new(backend), result_tx, ctx.clone());

        let options = SimulationOptions::load_or_empty(args.options.as_deref());
        let prefs = FileStore::open(args.prefs);
        let theme = Theme::restore(&prefs);
        apply_theme(ctx, theme);

        let mut tabs = TabSet::new()
            .with_tab(SIMULATION_TAB, "Simulation")
            .with_tab(VIEWER_TAB, "Viewer");
        tabs.open_target(SIMULATION_TAB);

        let mut ui_state = UIState::default();
        ui_state.add_log(format!("Server: {server_url}"));
        if options.is_empty() {
            ui_state.add_log("ERROR: no simulation options loaded".into());
        }

        Self {
            cmd_tx,
            result_rx,
            ui_state,
            viewer: ViewerState::default(),
            panel: PanelState::new(options),
            simulation: SimulationView::default(),
            tabs,
            theme,
            prefs,
            server_url,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { path, image } => {
                    let texture = ctx.load_texture(
                        "viewer",
                        rgba_to_color_image(&image),
                        egui::TextureOptions::NEAREST,
                    );
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{})",
                        path.display(),
                        image.width(),
                        image.height()
                    ));
                    self.viewer.widget.load(image);
                    self.viewer.texture = Some(texture);
                }
                WorkerResult::SubmitFinished { result } => {
                    match self.panel.finish_submit(result) {
                        SubmitOutcome::Rendered { width, height } => {
                            self.update_simulation_texture(ctx);
                            self.ui_state
                                .add_log(format!("Simulation image received ({width}x{height})"));
                        }
                        SubmitOutcome::DecodeFailed => {
                            self.ui_state
                                .add_log("ERROR: failed to load image data".into());
                        }
                        SubmitOutcome::Failed => {
                            self.ui_state.add_log("ERROR: generation request failed".into());
                        }
                    }
                }
                WorkerResult::PngSaved { path, target } => match target {
                    SaveTarget::Simulation => self.panel.notify_saved(&path),
                    SaveTarget::Viewer => {
                        self.ui_state.add_log(format!("Exported view: {}", path.display()));
                    }
                },
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn update_simulation_texture(&mut self, ctx: &egui::Context) {
        let Some(surface) = self.panel.surface() else {
            return;
        };
        let texture = ctx.load_texture(
            "simulation",
            rgba_to_color_image(surface),
            egui::TextureOptions::NEAREST,
        );
        self.simulation.texture = Some(texture);
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Flip the theme, persist it and restyle the UI.
    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        if let Err(e) = self.theme.toggle(&mut self.prefs) {
            tracing::error!("cannot persist theme: {e}");
            self.ui_state.add_log(format!("ERROR: cannot persist theme: {e}"));
        }
        apply_theme(ctx, self.theme);
    }
}

impl eframe::App for CellviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::tabs::show(ctx, self);
        panels::status::show(ctx, self);

        if self.tabs.is_visible(SIMULATION_TAB) {
            panels::simulation::show(ctx, self);
        } else if self.tabs.is_visible(VIEWER_TAB) {
            panels::viewer::show(ctx, self);
        } else {
            egui::CentralPanel::default().show(ctx, |_| {});
        }

        panels::notice::show(ctx, self);

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About Cellview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Cellview");
                        ui.label("Cellular automaton image viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let visuals = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(visuals);
}
