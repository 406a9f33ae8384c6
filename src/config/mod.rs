//! Configuration file support for vectorpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/vectorpad/config.toml`. Settings
//! include drawing tool defaults, document storage options, and raster export
//! dimensions.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

pub use types::{DrawingConfig, ExportConfig, StorageConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::draw::color::{self, Color};
use crate::draw::FontSpec;
use crate::input::ToolSettings;
use crate::session::CompressionMode;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// stroke_color = "black"
/// fill_color = "#3070b0"
/// line_width = 2
/// font_family = "Arial"
/// font_size = 12
///
/// [storage]
/// compress = true
/// compress_threshold_bytes = 65536
///
/// [export]
/// width = 1280
/// height = 800
/// background = "white"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing tool defaults (colors, thickness, font)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Document storage options
    #[serde(default)]
    pub storage: StorageConfig,

    /// Raster export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged, so a hand-edited config file never aborts startup.
    ///
    /// Validated ranges:
    /// - `line_width`: 1 - 20
    /// - `font_size`: 6 - 96
    /// - `export.width` / `export.height`: 1 - 8192
    fn validate_and_clamp(&mut self) {
        if !(1..=20).contains(&self.drawing.line_width) {
            log::warn!(
                "Invalid line_width {}, clamping to 1-20 range",
                self.drawing.line_width
            );
            self.drawing.line_width = self.drawing.line_width.clamp(1, 20);
        }

        if !(6..=96).contains(&self.drawing.font_size) {
            log::warn!(
                "Invalid font_size {}, clamping to 6-96 range",
                self.drawing.font_size
            );
            self.drawing.font_size = self.drawing.font_size.clamp(6, 96);
        }

        if !(1..=8192).contains(&self.export.width) {
            log::warn!(
                "Invalid export width {}, clamping to 1-8192 range",
                self.export.width
            );
            self.export.width = self.export.width.clamp(1, 8192);
        }

        if !(1..=8192).contains(&self.export.height) {
            log::warn!(
                "Invalid export height {}, clamping to 1-8192 range",
                self.export.height
            );
            self.export.height = self.export.height.clamp(1, 8192);
        }

        for (label, value) in [
            ("stroke_color", &mut self.drawing.stroke_color),
            ("fill_color", &mut self.drawing.fill_color),
            ("export background", &mut self.export.background),
        ] {
            if value.parse::<Color>().is_err() {
                log::warn!("Invalid {label} '{value}', falling back to default");
                *value = String::new();
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/vectorpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.,
    /// HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("vectorpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Builds the initial toolbar settings from the drawing section.
    pub fn tool_settings(&self) -> ToolSettings {
        let stroke = parse_or(&self.drawing.stroke_color, color::BLACK);
        ToolSettings {
            stroke_color: stroke,
            fill_color: parse_or(&self.drawing.fill_color, color::BLACK),
            line_width: self.drawing.line_width,
            font: FontSpec {
                family: self.drawing.font_family.clone(),
                size: self.drawing.font_size,
                style: self.drawing.font_style.clone(),
            },
            ..ToolSettings::default()
        }
    }

    /// Canvas background color for rendering and export.
    pub fn export_background(&self) -> Color {
        parse_or(&self.export.background, color::WHITE)
    }

    /// Compression mode derived from the storage section.
    pub fn compression_mode(&self) -> CompressionMode {
        if !self.storage.compress {
            CompressionMode::Off
        } else if self.storage.compress_threshold_bytes == 0 {
            CompressionMode::On
        } else {
            CompressionMode::Auto {
                threshold_bytes: self.storage.compress_threshold_bytes,
            }
        }
    }
}

fn parse_or(value: &str, fallback: Color) -> Color {
    value.parse().unwrap_or(fallback)
}
