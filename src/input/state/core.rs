//! Canvas controller and gesture state machine.

use super::select::SelectState;
use super::shapes::ShapeDrawer;
use super::text::TextBoxBuilder;
use crate::draw::color::{self, Color};
use crate::draw::{Drawing, DrawingObject, ObjectId};
use crate::input::settings::ToolSettings;
use crate::input::tool::Tool;
use crate::util::{Point, Rect};

/// Current pointer gesture state machine.
///
/// A gesture is the down→drag*→up sequence of one pointer interaction. The
/// tool, the toolbar style, and the anchor point are captured at
/// pointer-down; drag and release events route to the captured tool and draw
/// with the captured style even if the toolbar changes mid-gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// No button held - waiting for input
    Idle,
    /// Pointer held down since `anchor`
    Active {
        /// Tool captured at gesture start
        tool: Tool,
        /// Toolbar settings captured at gesture start
        style: ToolSettings,
        /// Where the pointer went down
        anchor: Point,
        /// Most recent pointer position (pen segments chain from here)
        last: Point,
    },
}

/// Single authoritative owner of the drawing.
///
/// Routes every pointer event to the tool logic selected at gesture start,
/// and exposes the serialize/deserialize and shell-command entry points.
/// Everything is synchronous and single-threaded; the only state carried
/// between events is the gesture itself plus the per-tool collection state
/// (polygon vertices, marquee capture, text box under construction).
pub struct CanvasController {
    /// The drawing being edited; z-order = list order
    pub drawing: Drawing,
    /// Live toolbar settings (snapshot taken per gesture)
    pub settings: ToolSettings,
    /// Canvas background color; the eraser stamps patches of this color
    pub background: Color,
    /// Whether the display needs repainting
    pub needs_redraw: bool,
    pub(crate) gesture: Gesture,
    pub(crate) shape_drawer: ShapeDrawer,
    pub(crate) text_builder: TextBoxBuilder,
    pub(crate) select: SelectState,
    /// Object armed by the Move tool for the current gesture
    pub(crate) ops_target: Option<ObjectId>,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new(ToolSettings::default())
    }
}

impl CanvasController {
    pub fn new(settings: ToolSettings) -> Self {
        Self {
            drawing: Drawing::new(),
            settings,
            background: color::WHITE,
            needs_redraw: true,
            gesture: Gesture::Idle,
            shape_drawer: ShapeDrawer::new(),
            text_builder: TextBoxBuilder::new(),
            select: SelectState::new(),
            ops_target: None,
        }
    }

    /// Clears the drawing and all transient tool state. Tool settings are
    /// deliberately left alone; "new drawing" resets the canvas, not the
    /// toolbar.
    pub fn clear(&mut self) {
        self.drawing.clear();
        self.reset_transient_state();
        self.needs_redraw = true;
        log::debug!("canvas cleared");
    }

    /// Settings the current gesture draws with: the snapshot taken at
    /// pointer-down, or the live toolbar when no gesture is active.
    pub(crate) fn gesture_style(&self) -> &ToolSettings {
        match &self.gesture {
            Gesture::Active { style, .. } => style,
            Gesture::Idle => &self.settings,
        }
    }

    /// Drops every reference tools hold into the drawing. Called whenever
    /// the object list is replaced wholesale (clear, open).
    pub(crate) fn reset_transient_state(&mut self) {
        self.gesture = Gesture::Idle;
        self.shape_drawer = ShapeDrawer::new();
        self.text_builder = TextBoxBuilder::new();
        self.select = SelectState::new();
        self.ops_target = None;
    }

    /// The dashed highlight rectangle around the single-selected object, if
    /// any. Rendered by the shell as a transient overlay; never serialized.
    pub fn highlight_rect(&self) -> Option<Rect> {
        self.select.highlight()
    }

    /// The live marquee rectangle, if a marquee drag is in progress and not
    /// hidden by an object move.
    pub fn marquee_rect(&self) -> Option<Rect> {
        self.select.marquee()
    }

    /// Handles of the text boxes created so far, in creation order.
    pub fn text_boxes(&self) -> &[ObjectId] {
        self.text_builder.text_boxes()
    }

    /// Replaces the content of a text box. The stored content is what
    /// serialization emits (trimmed); the live edit buffer belongs to the
    /// shell's text widget.
    pub fn set_text_content(&mut self, id: ObjectId, content: &str) -> bool {
        match self.drawing.get_mut(id) {
            Some(DrawingObject::TextBox { content: slot, .. }) => {
                *slot = content.trim().to_string();
                self.needs_redraw = true;
                true
            }
            _ => false,
        }
    }

    /// Inserts a placed image at `top_left` with its decoded dimensions.
    pub fn insert_image(
        &mut self,
        path: std::path::PathBuf,
        top_left: Point,
        pixel_width: u32,
        pixel_height: u32,
    ) -> ObjectId {
        self.needs_redraw = true;
        self.drawing.push(DrawingObject::Image {
            path,
            top_left,
            pixel_width,
            pixel_height,
        })
    }
}
