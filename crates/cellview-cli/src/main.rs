mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cellview", about = "Cellular automaton image client")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request an image from the server and save it as PNG
    Generate(commands::generate::GenerateArgs),
    /// Render an image through the viewer's zoom/pan transform and export it
    Render(commands::render::RenderArgs),
    /// Print or save the default simulation option catalog
    Options(commands::options::OptionsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Options(args) => commands::options::run(args),
    }
}
