//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Drawing tool defaults.
///
/// Controls the toolbar state when the application starts. Everything here
/// can be changed at runtime from the toolbar; the config only seeds the
/// initial values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default stroke color - a named color (red, green, blue, yellow,
    /// orange, pink, white, black) or a `#rrggbb` hex string
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,

    /// Default interior color used by the Fill tool
    #[serde(default = "default_fill_color")]
    pub fill_color: String,

    /// Default stroke thickness in pixels (valid range: 1 - 20)
    #[serde(default = "default_line_width")]
    pub line_width: u32,

    /// Font family name for new text boxes
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size for new text boxes in points (valid range: 6 - 96)
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Font style (e.g., "", "bold", "italic", "bold italic")
    #[serde(default)]
    pub font_style: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            fill_color: default_fill_color(),
            line_width: default_line_width(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_style: String::new(),
        }
    }
}

/// Document storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Gzip-compress saved documents
    #[serde(default)]
    pub compress: bool,

    /// When compressing, only documents larger than this many bytes are
    /// compressed; 0 compresses unconditionally
    #[serde(default = "default_compress_threshold")]
    pub compress_threshold_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            compress: false,
            compress_threshold_bytes: default_compress_threshold(),
        }
    }
}

/// Raster export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Export canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_export_width")]
    pub width: u32,

    /// Export canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_export_height")]
    pub height: u32,

    /// Canvas background color behind the drawing
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: default_export_width(),
            height: default_export_height(),
            background: default_background(),
        }
    }
}

fn default_stroke_color() -> String {
    "black".to_string()
}

fn default_fill_color() -> String {
    "black".to_string()
}

fn default_line_width() -> u32 {
    1
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_font_size() -> u32 {
    10
}

fn default_compress_threshold() -> u64 {
    0
}

fn default_export_width() -> u32 {
    1000
}

fn default_export_height() -> u32 {
    700
}

fn default_background() -> String {
    "white".to_string()
}
