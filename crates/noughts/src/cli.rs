//! Command-line interface for noughts.

use crate::theme::Theme;
use clap::Parser;
use noughts_engine::{GameMode, Player};
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe for two players or against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Skipped if it does not exist.
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Opponent: "pvp" (two players) or "ai" (versus the computer)
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Symbol the human plays against the computer (X or O)
    #[arg(short, long)]
    pub symbol: Option<Player>,

    /// Colour scheme: light or dark
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Delay before the computer's move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs (stdout belongs to the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
