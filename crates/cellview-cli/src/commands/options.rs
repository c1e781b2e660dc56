use std::path::PathBuf;

use anyhow::{Context, Result};
use cellview_core::options::SimulationOptions;
use clap::Args;

#[derive(Args)]
pub struct OptionsArgs {
    /// Write the catalog to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the built-in option catalog as TOML.
pub fn run(args: &OptionsArgs) -> Result<()> {
    let toml_str = SimulationOptions::builtin().to_toml_string()?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write options to {}", path.display()))?;
        println!("Default options saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
