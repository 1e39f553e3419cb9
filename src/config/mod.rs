//! Configuration file support for inklayer.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/inklayer/config.toml`. Settings
//! include drawing defaults, publish cadence, and output locations for saved
//! drawings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{DrawingConfig, OutputConfig, PublishConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// pen_width = 5.0
/// eraser_width = 20.0
/// pen_color = "white"
///
/// [publish]
/// frames_per_second = 60
///
/// [output]
/// directory = "~/Pictures/Inklayer"
/// filename_template = "drawing_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Pen and eraser defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Snapshot publish cadence
    #[serde(default)]
    pub publish: PublishConfig,

    /// Output locations for saved drawings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged.
    ///
    /// Validated ranges:
    /// - `pen_width`: 1.0 - 64.0
    /// - `eraser_width`: 1.0 - 128.0
    /// - `frames_per_second`: 1 - 240
    fn validate_and_clamp(&mut self) {
        // Pen width: 1.0 - 64.0
        if !(1.0..=64.0).contains(&self.drawing.pen_width) {
            log::warn!(
                "Invalid pen_width {:.1}, clamping to 1.0-64.0 range",
                self.drawing.pen_width
            );
            self.drawing.pen_width = self.drawing.pen_width.clamp(1.0, 64.0);
        }

        // Eraser width: 1.0 - 128.0
        if !(1.0..=128.0).contains(&self.drawing.eraser_width) {
            log::warn!(
                "Invalid eraser_width {:.1}, clamping to 1.0-128.0 range",
                self.drawing.eraser_width
            );
            self.drawing.eraser_width = self.drawing.eraser_width.clamp(1.0, 128.0);
        }

        // Publish cadence: 1 - 240 fps
        if !(1..=240).contains(&self.publish.frames_per_second) {
            log::warn!(
                "Invalid frames_per_second {}, clamping to 1-240 range",
                self.publish.frames_per_second
            );
            self.publish.frames_per_second = self.publish.frames_per_second.clamp(1, 240);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inklayer/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.,
    /// HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inklayer");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            debug!("No config file found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }
}
