//! Application configuration loaded from TOML.

use crate::celebration::{ConfettiConfig, Positioning};
use crate::theme::Theme;
use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Theme the game starts in.
    #[serde(default)]
    theme: Theme,

    /// Milliseconds between animation ticks.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,

    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: String,

    /// Confetti settings for the party theme.
    #[serde(default)]
    celebration: CelebrationConfig,
}

/// Confetti settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct CelebrationConfig {
    /// Pieces of confetti per burst.
    #[serde(default = "default_pieces")]
    pieces: usize,

    /// Downward acceleration in cells per tick squared.
    #[serde(default = "default_gravity")]
    gravity: f32,

    /// Palette as `#rrggbb` strings or color names.
    #[serde(default = "default_colors")]
    colors: Vec<String>,

    /// Whole viewport (`fixed`) or game panel only (`absolute`).
    #[serde(default)]
    positioning: Positioning,
}

#[instrument]
fn default_tick_rate_ms() -> u64 {
    33
}

#[instrument]
fn default_log_file() -> String {
    "strictly_tictactoe.log".to_string()
}

#[instrument]
fn default_pieces() -> usize {
    200
}

#[instrument]
fn default_gravity() -> f32 {
    0.03
}

#[instrument]
fn default_colors() -> Vec<String> {
    [
        "#f44336", "#e91e63", "#9c27b0", "#673ab7", "#3f51b5", "#2196f3", "#03a9f4", "#00bcd4",
        "#009688", "#4caf50", "#8bc34a", "#cddc39", "#ffeb3b", "#ffc107", "#ff9800", "#ff5722",
        "#795548",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            pieces: default_pieces(),
            gravity: default_gravity(),
            colors: default_colors(),
            positioning: Positioning::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            tick_rate_ms: default_tick_rate_ms(),
            log_file: default_log_file(),
            celebration: CelebrationConfig::default(),
        }
    }
}

impl CelebrationConfig {
    /// Parses the palette into terminal colors.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Vec<Color>, ConfigError> {
        self.colors
            .iter()
            .map(|c| {
                Color::from_str(c)
                    .map_err(|_| ConfigError::new(format!("Invalid confetti color: {}", c)))
            })
            .collect()
    }

    /// Builds the confetti template. Field size is filled in at burst time.
    #[instrument(skip(self))]
    pub fn to_confetti(&self) -> Result<ConfettiConfig, ConfigError> {
        Ok(ConfettiConfig::default()
            .with_number_of_pieces(self.pieces)
            .with_gravity(self.gravity)
            .with_colors(self.palette()?)
            .with_positioning(self.positioning))
    }

    #[instrument(skip(self))]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.colors.is_empty() {
            return Err(ConfigError::new("Confetti palette is empty".to_string()));
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(ConfigError::new(format!(
                "Confetti gravity must be positive, got {}",
                self.gravity
            )));
        }
        self.palette().map(|_| ())
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(theme = %config.theme, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses and validates TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Returns a copy with the theme replaced.
    #[instrument(skip(self))]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Tick interval as a duration.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    #[instrument(skip(self))]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::new("tick_rate_ms must be at least 1".to_string()));
        }
        self.celebration.validate()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_celebration_table() {
        let config = AppConfig::from_toml(
            "theme = \"party\"\n[celebration]\npieces = 50\npositioning = \"absolute\"\n",
        )
        .unwrap();
        assert_eq!(*config.theme(), Theme::Party);
        assert_eq!(*config.celebration().pieces(), 50);
        assert_eq!(*config.celebration().positioning(), Positioning::Absolute);
        assert_eq!(config.celebration().colors(), &default_colors());
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = AppConfig::from_toml("[celebration]\ncolors = [\"#zzzzzz\"]\n").unwrap_err();
        assert!(err.message.contains("#zzzzzz"));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        assert!(AppConfig::from_toml("tick_rate_ms = 0\n").is_err());
    }

    #[test]
    fn test_template_carries_palette() {
        let template = CelebrationConfig::default().to_confetti().unwrap();
        assert_eq!(template.colors()[0], Color::Rgb(0xf4, 0x43, 0x36));
        assert_eq!(*template.number_of_pieces(), 200);
    }
}
