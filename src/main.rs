#![deny(unsafe_code)]

mod common;
mod config;
mod daemon;
mod x11;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::FmtSubscriber;

use crate::common::types::Corner;
use crate::config::Settings;

#[derive(Parser, Debug)]
#[command(name = "xhotcorners")]
#[command(version)]
#[command(about = "Invisible hot-corner trigger window for X11", long_about = None)]
struct Cli {
    /// Screen corner to park the trigger window in
    #[arg(long, value_enum)]
    corner: Option<Corner>,

    /// Edge length of the trigger window in pixels
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    size: Option<u16>,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug mode with verbose logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter_directives = if cli.debug {
        // Debug mode: detailed logs for our app, but keep noisy libraries (x11rb) at info
        "info,xhotcorners=debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::load().context("Failed to load settings")?,
    };
    if let Some(corner) = cli.corner {
        settings.corner = corner;
    }
    if let Some(size) = cli.size {
        settings.size = size;
    }

    daemon::run(&settings)
}
