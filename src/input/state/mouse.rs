//! Pointer event routing.

use crate::draw::DrawingObject;
use crate::input::events::PointerEvent;
use crate::input::tool::Tool;
use crate::util::Point;

use super::core::{CanvasController, Gesture};

impl CanvasController {
    /// Processes a pointer press.
    ///
    /// Records the drag anchor, snapshots the active tool and toolbar style
    /// for the lifetime of the gesture, and dispatches the press to that
    /// tool. Delete and the restacking tools act immediately on press rather
    /// than waiting for a drag.
    pub fn on_pointer_down(&mut self, event: PointerEvent) {
        let point = event.point();
        let tool = self.settings.active_tool;
        self.gesture = Gesture::Active {
            tool,
            style: self.settings.clone(),
            anchor: point,
            last: point,
        };
        log::debug!("gesture start: {tool} at ({:.1}, {:.1})", point.x, point.y);

        if tool == Tool::Select {
            self.select_object(point);
            self.apply_selected_style();
        } else {
            self.select.clear_highlight();
        }

        match tool {
            Tool::Pen => {
                // First point only anchors the stroke; segments appear on drag.
            }
            Tool::Eraser => self.erase_at(point),
            Tool::StartPolygon => self.append_polygon_vertex(point),
            Tool::ClosePolygon => self.close_polygon(),
            Tool::Line | Tool::Square | Tool::Oval | Tool::Triangle => {
                self.draw_shape_preview(point, point);
            }
            Tool::Text => self.start_text_box(point),
            Tool::Move => self.ops_target = self.drawing.nearest(point),
            Tool::Delete => self.delete_nearest(point),
            Tool::Fill => self.fill_at(point),
            Tool::GradientFill => self.gradient_fill_at(point),
            Tool::Forward => self.restack_nearest(point, true),
            Tool::Backward => self.restack_nearest(point, false),
            Tool::SelectObjects => self.start_marquee(point),
            Tool::Select | Tool::MoveObjects => {}
        }
        self.needs_redraw = true;
    }

    /// Processes pointer motion while the button is held.
    ///
    /// Routes to the tool and style captured at gesture start, not the live
    /// toolbar, so switching tools or colors mid-drag cannot corrupt the
    /// gesture.
    pub fn on_pointer_drag(&mut self, event: PointerEvent) {
        let (tool, anchor, last) = match &self.gesture {
            Gesture::Active { tool, anchor, last, .. } => (*tool, *anchor, *last),
            Gesture::Idle => return,
        };
        let point = event.point();

        match tool {
            Tool::Pen => self.pen_segment(last, point),
            Tool::Eraser => self.erase_at(point),
            Tool::StartPolygon => self.append_polygon_vertex(point),
            Tool::Line | Tool::Square | Tool::Oval | Tool::Triangle => {
                self.draw_shape_preview(anchor, point);
            }
            Tool::Text => self.adjust_text_box(anchor, point),
            Tool::Move => self.drag_target(last, point),
            Tool::SelectObjects => self.update_marquee(point),
            Tool::MoveObjects => self.move_captured(last, point),
            _ => {}
        }

        if let Gesture::Active { last, .. } = &mut self.gesture {
            *last = point;
        }
        self.needs_redraw = true;
    }

    /// Processes pointer release, finalizing the gesture.
    pub fn on_pointer_up(&mut self, event: PointerEvent) {
        let (tool, anchor) = match &self.gesture {
            Gesture::Active { tool, anchor, .. } => (*tool, *anchor),
            Gesture::Idle => return,
        };
        let point = event.point();

        match tool {
            Tool::Line | Tool::Square | Tool::Oval | Tool::Triangle => {
                // Commit: the preview object stays; dropping the handle makes
                // the next drag start a fresh shape instead of mutating this one.
                self.finish_shape_preview();
            }
            Tool::ClosePolygon => self.close_polygon(),
            Tool::Text => self.finish_text_box(anchor, point),
            Tool::Move | Tool::Delete => self.ops_target = None,
            Tool::SelectObjects => self.end_marquee(point),
            Tool::MoveObjects => self.end_captured_move(),
            _ => {}
        }

        self.gesture = Gesture::Idle;
        self.needs_redraw = true;
    }

    /// Double-click is a distinct input signal bound to polygon close,
    /// regardless of the active tool.
    pub fn on_double_click(&mut self, _event: PointerEvent) {
        self.close_polygon();
        self.needs_redraw = true;
    }

    /// Appends one freehand segment from the previous pointer position.
    fn pen_segment(&mut self, from: Point, to: Point) {
        let style = self.gesture_style();
        let (color, width) = (style.stroke_color, style.line_width);
        self.drawing.push(DrawingObject::Line {
            points: [from, to],
            color,
            width,
        });
    }

    /// Stamps a small background-colored patch over existing content.
    fn erase_at(&mut self, point: Point) {
        let width = self.gesture_style().line_width;
        self.drawing.push(DrawingObject::Rectangle {
            corners: [point.translated(-1.0, -1.0), point.translated(1.0, 1.0)],
            fill: Some(self.background),
            outline: Some(self.background),
            width,
        });
    }
}
