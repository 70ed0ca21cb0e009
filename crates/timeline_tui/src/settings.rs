//! User settings loaded from a TOML file and overridden by CLI flags.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Show the move list oldest first.
    ascending: bool,

    /// Show cell numbers on empty cells.
    cell_hints: bool,

    /// File that receives log output.
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ascending: true,
            cell_hints: false,
            log_file: PathBuf::from("timeline.log"),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SettingsError::new(format!("Failed to read settings file: {}", e))
        })?;

        toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Resolves settings for `cli`: the config file if present, defaults
    /// otherwise, then CLI overrides.
    #[instrument(skip(cli), fields(config = %cli.config.display()))]
    pub fn resolve(cli: &Cli) -> Result<Self, SettingsError> {
        let mut settings = if cli.config.exists() {
            Self::from_file(&cli.config)?
        } else {
            Self::default()
        };

        if let Some(log_file) = &cli.log_file {
            settings.log_file = log_file.clone();
        }
        if cli.descending {
            settings.ascending = false;
        }
        if cli.hints {
            settings.cell_hints = true;
        }
        Ok(settings)
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
