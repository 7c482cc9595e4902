//! Session settings: defaults, overlaid by a TOML file, overlaid by CLI flags.

use crate::cli::Cli;
use crate::theme::Theme;
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::{GameMode, Player};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Delay before the computer's move becomes visible.
pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 400;

/// Everything the app needs to start a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Opening mode.
    mode: GameMode,

    /// Symbol the human plays against the computer.
    human_symbol: Player,

    /// Opening colour scheme.
    theme: Theme,

    /// Milliseconds between the turn passing to the computer and its move.
    computer_delay_ms: u64,

    /// Fixed seed for the computer's choices; random when absent.
    seed: Option<u64>,

    /// Log destination.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            human_symbol: Player::X,
            theme: Theme::default(),
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
            seed: None,
            log_file: PathBuf::from("noughts.log"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(mode = %settings.mode, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies any flags given on the command line.
    #[instrument(skip_all)]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(mode) = cli.mode {
            self.mode = mode;
        }
        if let Some(symbol) = cli.symbol {
            self.human_symbol = symbol;
        }
        if let Some(theme) = cli.theme {
            self.theme = theme;
        }
        if let Some(delay) = cli.delay_ms {
            self.computer_delay_ms = delay;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        self
    }

    /// [`computer_delay_ms`](Self::computer_delay_ms) as a `Duration`.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
