//! Tool selection and style settings.

use super::tool::Tool;
use crate::draw::color::{self, Color};
use crate::draw::object::FontSpec;

/// The full set of toolbar-controlled settings.
///
/// This is an explicit configuration object owned by the canvas controller
/// rather than ambient process-wide state: the dispatcher snapshots the
/// pieces a gesture needs at pointer-down, so changing the active tool or a
/// color mid-drag never affects the gesture already in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    /// Currently active tool
    pub active_tool: Tool,
    /// Stroke/outline color for new shapes
    pub stroke_color: Color,
    /// Interior color applied by the Fill tool
    pub fill_color: Color,
    /// Gradient endpoint colors for Gradual fill
    pub gradient_start: Color,
    pub gradient_end: Color,
    /// Foreground color for text boxes
    pub text_color: Color,
    /// Background color behind text box content
    pub text_background: Color,
    /// Stroke thickness in pixels
    pub line_width: u32,
    /// Font settings for new text boxes
    pub font: FontSpec,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            active_tool: Tool::Pen,
            stroke_color: color::BLACK,
            fill_color: color::BLACK,
            gradient_start: color::BLACK,
            gradient_end: color::BLACK,
            text_color: color::BLACK,
            text_background: color::WHITE,
            line_width: 1,
            font: FontSpec::default(),
        }
    }
}

impl ToolSettings {
    /// Parses a toolbar thickness label like `"3px"`, falling back to 1 for
    /// an empty or malformed value.
    pub fn set_line_width_label(&mut self, label: &str) {
        self.line_width = label
            .trim()
            .trim_end_matches("px")
            .parse()
            .unwrap_or(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_width_label_strips_px_suffix() {
        let mut settings = ToolSettings::default();
        settings.set_line_width_label("8px");
        assert_eq!(settings.line_width, 8);
        settings.set_line_width_label("12");
        assert_eq!(settings.line_width, 12);
        settings.set_line_width_label("");
        assert_eq!(settings.line_width, 1);
        settings.set_line_width_label("wide");
        assert_eq!(settings.line_width, 1);
    }
}
