//! bevis - a terminal rendition of the Sikt student-ID screen

mod tui;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bevis", version, about = "Terminal rendition of the Sikt student-ID card")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Rasterize the app icon set from the vector logo
    Icons {
        /// Source SVG
        #[arg(long, default_value = "assets/logo.svg")]
        input: PathBuf,
        /// Output directory for the PNG set
        #[arg(long, default_value = "assets")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Icons { input, out_dir }) => run_icons(&input, &out_dir),
        None => {
            init_file_logging()?;
            tui::run().await
        }
    }
}

fn run_icons(input: &Path, out_dir: &Path) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(default_env_filter())
        .with_writer(std::io::stderr)
        .init();

    match bevis_core::icons::generate_icons(input, out_dir) {
        Ok(written) => {
            tracing::info!("Generated {} icons", written.len());
            Ok(())
        }
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

/// The TUI owns stdout, so its logs go to a file under the config dir.
fn init_file_logging() -> Result<()> {
    let Some(dir) = dirs::config_dir() else {
        return Ok(());
    };
    let dir = dir.join("bevis");
    std::fs::create_dir_all(&dir).context("creating log directory")?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("bevis.log"))
        .context("opening log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(default_env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn default_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
