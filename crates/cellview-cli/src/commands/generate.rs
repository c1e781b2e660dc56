use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use cellview_core::client::HttpBackend;
use cellview_core::consts::{DEFAULT_SERVER_URL, SIMULATION_EXPORT_FILENAME};
use cellview_core::options::SimulationOptions;
use cellview_core::panel::{PanelState, SubmitOutcome};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use crate::summary::print_request_summary;

#[derive(Args)]
pub struct GenerateArgs {
    /// Base URL of the generation server
    #[arg(long, env = "CELLVIEW_SERVER", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Option catalog (TOML); the built-in catalog is used when omitted
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Rule name (defaults to the first rule in the catalog)
    #[arg(long)]
    pub rule: Option<String>,

    /// Number of cells per generation
    #[arg(long, default_value = "100")]
    pub cell_space: String,

    /// Number of generations
    #[arg(long, default_value = "100")]
    pub num_evolutions: String,

    /// Initialization method (defaults to "random" when available)
    #[arg(long)]
    pub init_method: Option<String>,

    /// Print method (defaults to the first in the catalog)
    #[arg(long)]
    pub print_method: Option<String>,

    /// Initial live-cell density for the random init method
    #[arg(long, default_value = "0.5")]
    pub density: String,

    /// Output file path
    #[arg(short, long, default_value = SIMULATION_EXPORT_FILENAME)]
    pub output: PathBuf,
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    let options = match args.options {
        Some(ref path) => SimulationOptions::load(path)
            .with_context(|| format!("Failed to read options from {}", path.display()))?,
        None => SimulationOptions::builtin(),
    };

    let mut panel = PanelState::new(options);
    if let Some(ref rule) = args.rule {
        panel.form.rule = rule.clone();
    }
    if let Some(ref method) = args.init_method {
        panel.set_init_method(method);
    }
    if let Some(ref method) = args.print_method {
        panel.form.print_method = method.clone();
    }
    panel.form.cell_space = args.cell_space.clone();
    panel.form.num_evolutions = args.num_evolutions.clone();
    panel.form.density = args.density.clone();
    panel.commit_density();

    let backend = HttpBackend::new(args.server.clone());
    tracing::debug!(endpoint = %backend.endpoint(), "submitting simulation request");
    print_request_summary(&panel.form.to_request(), &backend.endpoint());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message("Waiting for server...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let outcome = panel.submit_with(&backend);
    pb.finish_and_clear();

    match outcome {
        Some(SubmitOutcome::Rendered { width, height }) => {
            panel
                .save(&args.output)
                .with_context(|| format!("Failed to write {}", args.output.display()))?;
            println!("Image {width}x{height} saved to {}", args.output.display());
            Ok(())
        }
        Some(SubmitOutcome::DecodeFailed) => bail!("Server response did not contain a decodable image"),
        Some(SubmitOutcome::Failed) => {
            let message = panel
                .take_notice()
                .map(|n| n.message)
                .unwrap_or_else(|| "Error generating image".into());
            bail!(message)
        }
        None => bail!("A request is already in flight"),
    }
}
