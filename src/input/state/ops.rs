//! Single-object operations: move, delete, restack.
//!
//! Each operation re-runs the nearest-object pick on the pointer-down that
//! triggers it; there is no armed selection carried between operations.

use crate::util::Point;

use super::core::CanvasController;

impl CanvasController {
    /// Drags the object armed at pointer-down by the per-event delta.
    pub(crate) fn drag_target(&mut self, previous: Point, point: Point) {
        let Some(id) = self.ops_target else {
            return;
        };
        if let Some(object) = self.drawing.get_mut(id) {
            object.translate(point.x - previous.x, point.y - previous.y);
        }
    }

    /// Deletes the object nearest the click. Empty canvas is a no-op.
    pub(crate) fn delete_nearest(&mut self, point: Point) {
        if let Some(id) = self.drawing.nearest(point) {
            self.drawing.remove(id);
            log::debug!("deleted object {id:?}");
        }
        self.ops_target = None;
    }

    /// Restacks the object nearest the click to the front or back.
    pub(crate) fn restack_nearest(&mut self, point: Point, to_front: bool) {
        if let Some(id) = self.drawing.nearest(point) {
            if to_front {
                self.drawing.raise_to_front(id);
            } else {
                self.drawing.lower_to_back(id);
            }
        }
    }
}
