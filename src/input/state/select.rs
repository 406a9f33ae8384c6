//! Single selection, marquee selection, and multi-object move.

use crate::draw::ObjectId;
use crate::util::{Point, Rect};

use super::core::CanvasController;

/// Selection state shared by the Select / select objects / Move objects
/// tools.
///
/// The highlight and marquee rectangles are transient overlay state: they
/// are rendered by the shell on top of the drawing and never enter the
/// object list, so saving mid-selection cannot leak them into a document.
#[derive(Debug, Default)]
pub(crate) struct SelectState {
    /// Single-selected object
    selected: Option<ObjectId>,
    /// Dashed highlight bounds around the selected object
    highlight: Option<Rect>,
    /// Marquee anchor; advanced while captured objects are dragged so a
    /// subsequent drag continues smoothly
    marquee_anchor: Option<Point>,
    /// Live marquee extent
    marquee_rect: Option<Rect>,
    /// Marquee hidden while a captured-set drag is in progress
    marquee_hidden: bool,
    /// Objects fully enclosed at marquee release
    captured: Vec<ObjectId>,
}

impl SelectState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn highlight(&self) -> Option<Rect> {
        self.highlight
    }

    pub(crate) fn marquee(&self) -> Option<Rect> {
        if self.marquee_hidden {
            None
        } else {
            self.marquee_rect
        }
    }

    pub(crate) fn clear_highlight(&mut self) {
        self.selected = None;
        self.highlight = None;
    }
}

impl CanvasController {
    /// Picks the object nearest the click and replaces the highlight
    /// overlay with its dashed bounding box.
    pub(crate) fn select_object(&mut self, point: Point) {
        self.select.clear_highlight();
        if let Some(id) = self.drawing.nearest(point) {
            self.select.selected = Some(id);
            self.select.highlight = self
                .drawing
                .get(id)
                .and_then(|object| object.bounding_box());
        }
    }

    /// Applies the current stroke color and line width to the selected
    /// object (per-object style editing, activated on selection).
    pub(crate) fn apply_selected_style(&mut self) {
        let Some(id) = self.select.selected else {
            return;
        };
        let color = self.settings.stroke_color;
        let width = self.settings.line_width;
        if let Some(object) = self.drawing.get_mut(id) {
            object.apply_stroke(color, width);
        }
    }

    /// Starts a marquee drag at `point`.
    pub(crate) fn start_marquee(&mut self, point: Point) {
        self.select.marquee_anchor = Some(point);
        self.select.marquee_rect = Some(Rect::from_corners(point, point));
        self.select.marquee_hidden = false;
    }

    /// Grows the marquee to the current pointer position.
    pub(crate) fn update_marquee(&mut self, point: Point) {
        if let Some(anchor) = self.select.marquee_anchor {
            self.select.marquee_rect = Some(Rect::from_corners(anchor, point));
        }
    }

    /// Ends the marquee drag, capturing the objects whose bounds are fully
    /// enclosed. Partial overlap does not qualify.
    pub(crate) fn end_marquee(&mut self, point: Point) {
        let Some(anchor) = self.select.marquee_anchor else {
            return;
        };
        let rect = Rect::from_corners(anchor, point);
        self.select.captured = self.drawing.enclosed(rect);
        log::debug!("marquee captured {} objects", self.select.captured.len());
    }

    /// Translates every captured object by the per-drag delta, hiding the
    /// marquee and advancing its anchor so the next drag continues smoothly.
    pub(crate) fn move_captured(&mut self, previous: Point, point: Point) {
        let dx = point.x - previous.x;
        let dy = point.y - previous.y;

        self.select.marquee_hidden = true;
        for &id in &self.select.captured {
            if let Some(object) = self.drawing.get_mut(id) {
                object.translate(dx, dy);
            }
        }

        if let Some(anchor) = self.select.marquee_anchor {
            self.select.marquee_anchor = Some(anchor.translated(dx, dy));
        }
        if let Some(rect) = self.select.marquee_rect {
            self.select.marquee_rect = Some(Rect {
                min: rect.min.translated(dx, dy),
                max: rect.max.translated(dx, dy),
            });
        }
    }

    /// Releases the captured set, leaving the moved objects in place.
    pub(crate) fn end_captured_move(&mut self) {
        self.select.captured.clear();
        self.select.marquee_hidden = false;
    }

    #[cfg(test)]
    pub(crate) fn captured_objects(&self) -> &[ObjectId] {
        &self.select.captured
    }
}
