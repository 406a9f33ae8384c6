//! Text box construction.

use crate::draw::{DrawingObject, ObjectId};
use crate::util::{Point, Rect};

use super::core::CanvasController;

/// State for the text tool plus the registry of created text boxes.
#[derive(Debug, Default)]
pub(crate) struct TextBoxBuilder {
    /// Dashed sizing rectangle shown while dragging
    preview: Option<ObjectId>,
    /// Every text box created, in creation order; used by the shell to bind
    /// edit widgets and by serialization consumers that need the registry.
    text_boxes: Vec<ObjectId>,
}

impl TextBoxBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn text_boxes(&self) -> &[ObjectId] {
        &self.text_boxes
    }
}

impl CanvasController {
    /// Pointer-down with the Text tool; the gesture anchor is the first
    /// corner of the region being dragged out.
    pub(crate) fn start_text_box(&mut self, _anchor: Point) {
        // Anchor is carried by the gesture; nothing to create until a drag
        // gives the region an extent.
    }

    /// Redraws the dashed sizing rectangle while the user drags.
    pub(crate) fn adjust_text_box(&mut self, anchor: Point, pointer: Point) {
        if let Some(previous) = self.text_builder.preview.take() {
            self.drawing.remove(previous);
        }
        let preview = self.drawing.push(DrawingObject::Rectangle {
            corners: [anchor, pointer],
            fill: None,
            outline: Some(crate::draw::color::BLACK),
            width: 1,
        });
        self.text_builder.preview = Some(preview);
    }

    /// Replaces the sizing rectangle with an editable text box bound to the
    /// font and color settings captured at pointer-down. A degenerate
    /// (zero-area) drag is a no-op.
    pub(crate) fn finish_text_box(&mut self, anchor: Point, pointer: Point) {
        if let Some(preview) = self.text_builder.preview.take() {
            self.drawing.remove(preview);
        }

        let rect = Rect::from_corners(anchor, pointer);
        if rect.width() == 0.0 || rect.height() == 0.0 {
            return;
        }

        let style = self.gesture_style().clone();
        let id = self.drawing.push(DrawingObject::TextBox {
            top_left: rect.min,
            width: rect.width(),
            height: rect.height(),
            content: String::new(),
            font: style.font,
            text_color: style.text_color,
            text_background: style.text_background,
            frame_color: style.stroke_color,
        });
        self.text_builder.text_boxes.push(id);
        log::debug!(
            "text box created at ({:.1}, {:.1}) size {:.0}x{:.0}",
            rect.min.x,
            rect.min.y,
            rect.width(),
            rect.height()
        );
    }

    /// Re-registers a text box loaded from a document so the registry stays
    /// consistent with the drawing.
    pub(crate) fn register_text_box(&mut self, id: ObjectId) {
        self.text_builder.text_boxes.push(id);
    }
}
