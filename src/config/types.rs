//! Configuration type definitions.

use crate::capture::{ExportConfig, expand_tilde};
use crate::draw::{Color, color};
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the appearance of the pen and eraser. The draw/erase selection
/// itself is runtime state supplied by the embedding UI, not configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Pen stroke width in pixels for draw mode (valid range: 1.0 - 64.0)
    #[serde(default = "default_pen_width")]
    pub pen_width: f64,

    /// Eraser stroke width in pixels (valid range: 1.0 - 128.0)
    /// Kept larger than the pen by default; erasing is a coarse corrective tool
    #[serde(default = "default_eraser_width")]
    pub eraser_width: f64,

    /// Ink color name for draw mode (white, black, red, green, blue, yellow)
    #[serde(default = "default_pen_color")]
    pub pen_color: String,
}

impl DrawingConfig {
    /// Resolves the configured ink color, falling back to white for
    /// unrecognized names.
    pub fn ink(&self) -> Color {
        Color::from_name(&self.pen_color).unwrap_or_else(|| {
            log::warn!(
                "Unknown pen_color '{}', falling back to white",
                self.pen_color
            );
            color::WHITE
        })
    }
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            pen_width: default_pen_width(),
            eraser_width: default_eraser_width(),
            pen_color: default_pen_color(),
        }
    }
}

/// Snapshot publishing settings.
///
/// Controls how often the overlay is snapshotted for the display compositor.
/// Snapshots are taken per display frame, never per pointer event, so this
/// bounds the pixel-copy cost regardless of input rate.
#[derive(Debug, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Publish cadence in frames per second (valid range: 1 - 240)
    #[serde(default = "default_frames_per_second")]
    pub frames_per_second: u32,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            frames_per_second: default_frames_per_second(),
        }
    }
}

/// Output settings for saved drawings.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Directory saved drawings are written to; supports a leading `~`.
    /// Empty means the platform pictures directory plus "Inklayer".
    #[serde(default)]
    pub directory: String,

    /// Filename template with chrono format specifiers.
    /// Empty means "drawing_%Y-%m-%d_%H%M%S".
    #[serde(default)]
    pub filename_template: String,
}

impl OutputConfig {
    /// Builds the export configuration, filling unset fields with defaults.
    pub fn export_config(&self) -> ExportConfig {
        let mut export = ExportConfig::default();
        if !self.directory.is_empty() {
            export.save_directory = expand_tilde(&self.directory);
        }
        if !self.filename_template.is_empty() {
            export.filename_template = self.filename_template.clone();
        }
        export
    }
}

fn default_pen_width() -> f64 {
    5.0
}

fn default_eraser_width() -> f64 {
    20.0
}

fn default_pen_color() -> String {
    "white".to_string()
}

fn default_frames_per_second() -> u32 {
    60
}
