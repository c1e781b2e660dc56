mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod workers;

use std::path::PathBuf;

use clap::Parser;

/// Desktop front end for the cellular automaton image service.
#[derive(Parser)]
#[command(name = "cellview-gui", version)]
pub struct GuiArgs {
    /// Base URL of the image generation server
    #[arg(long, env = "CELLVIEW_SERVER", default_value = cellview_core::consts::DEFAULT_SERVER_URL)]
    pub server: String,

    /// TOML file listing the selectable rules, init methods and print methods
    #[arg(long, env = "CELLVIEW_OPTIONS")]
    pub options: Option<PathBuf>,

    /// Preference file (theme)
    #[arg(long, env = "CELLVIEW_PREFS", default_value = "cellview-prefs.toml")]
    pub prefs: PathBuf,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = GuiArgs::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Cellview"),
        ..Default::default()
    };

    eframe::run_native(
        "Cellview",
        options,
        Box::new(|cc| Ok(Box::new(app::CellviewApp::new(&cc.egui_ctx, args)))),
    )
}
