//! Generic pointer event types for host-toolkit independence.

use crate::util::Point;

/// A pointer event delivered by the host shell.
///
/// The shell maps its native mouse events to this type; the canvas engine
/// only ever sees canvas-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for PointerEvent {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
