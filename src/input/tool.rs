//! Drawing tool selection.

use std::fmt;
use std::str::FromStr;

/// The closed set of canvas tools.
///
/// The active tool determines how pointer gestures are interpreted. The
/// toolbar historically identified tools by display string; [`FromStr`] and
/// [`fmt::Display`] keep those names working while the dispatcher itself
/// matches exhaustively on the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing - follows the pointer path
    Pen,
    /// Stamps background-colored patches over existing content
    Eraser,
    /// Straight line between anchor and pointer
    Line,
    /// Rectangle from corner to corner (toolbar label "Square")
    Square,
    /// Ellipse inscribed in the drag rectangle
    Oval,
    /// Equilateral triangle on the anchor-to-pointer segment
    Triangle,
    /// Click to collect polygon vertices
    StartPolygon,
    /// Close the in-progress polygon
    ClosePolygon,
    /// Drag out a text box region
    Text,
    /// Drag the nearest object
    Move,
    /// Delete the nearest object on click
    Delete,
    /// Flat-fill the nearest fillable object
    Fill,
    /// Gradient-fill the nearest supported object
    GradientFill,
    /// Restack the nearest object to the front
    Forward,
    /// Restack the nearest object to the back
    Backward,
    /// Single-object selection with style editing
    Select,
    /// Marquee multi-selection
    SelectObjects,
    /// Translate the marquee-captured set
    MoveObjects,
}

impl Tool {
    /// Toolbar display name, matching the historical tool identifiers.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::Square => "Square",
            Tool::Oval => "Oval",
            Tool::Triangle => "Triangle",
            Tool::StartPolygon => "Start polygon",
            Tool::ClosePolygon => "Close Polygon",
            Tool::Text => "Text",
            Tool::Move => "Move",
            Tool::Delete => "Delete",
            Tool::Fill => "Fill",
            Tool::GradientFill => "Gradual fill",
            Tool::Forward => "Forward",
            Tool::Backward => "Backward",
            Tool::Select => "Select",
            Tool::SelectObjects => "select objects",
            Tool::MoveObjects => "Move objects",
        }
    }

    /// Tools that drag out a one-shot shape preview.
    pub fn is_shape_tool(&self) -> bool {
        matches!(self, Tool::Line | Tool::Square | Tool::Oval | Tool::Triangle)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unrecognized tool name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool '{0}'")]
pub struct ParseToolError(pub String);

impl FromStr for Tool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [Tool; 18] = [
            Tool::Pen,
            Tool::Eraser,
            Tool::Line,
            Tool::Square,
            Tool::Oval,
            Tool::Triangle,
            Tool::StartPolygon,
            Tool::ClosePolygon,
            Tool::Text,
            Tool::Move,
            Tool::Delete,
            Tool::Fill,
            Tool::GradientFill,
            Tool::Forward,
            Tool::Backward,
            Tool::Select,
            Tool::SelectObjects,
            Tool::MoveObjects,
        ];
        ALL.into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| ParseToolError(s.to_string()))
    }
}
