//! Noughts - tic-tac-toe in the terminal.
//!
//! Two players share the keyboard, or one plays the computer.

#![warn(missing_docs)]

mod cli;
mod settings;
mod theme;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use settings::Settings;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?.with_cli(&cli);

    // Log to a file; the terminal belongs to the UI.
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("creating log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(
        mode = %settings.mode(),
        human_symbol = %settings.human_symbol(),
        theme = %settings.theme(),
        delay_ms = *settings.computer_delay_ms(),
        "Settings resolved"
    );

    tui::run(settings).await
}
