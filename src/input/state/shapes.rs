//! Shape drawing: drag previews and the polygon collection machine.

use crate::draw::{DrawingObject, ObjectId};
use crate::input::tool::Tool;
use crate::util::Point;

use super::core::{CanvasController, Gesture};

/// Polygon construction state.
///
/// `Collecting` accumulates clicked vertices; preview segments connecting
/// them live in the drawing until close, when they are replaced by a single
/// polygon object.
#[derive(Debug, Default)]
pub(crate) enum PolygonState {
    #[default]
    Idle,
    Collecting {
        vertices: Vec<Point>,
        segments: Vec<ObjectId>,
    },
}

/// Per-gesture shape drawing state.
#[derive(Debug, Default)]
pub(crate) struct ShapeDrawer {
    /// Live preview object, replaced on every drag event
    current_shape: Option<ObjectId>,
    pub(crate) polygon: PolygonState,
}

impl ShapeDrawer {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl CanvasController {
    /// Redraws the live preview for the anchor→pointer drag.
    ///
    /// The previous preview instance is deleted and a fresh one created with
    /// the current end point, so a drag costs O(1) objects rather than
    /// accumulating one per motion event.
    pub(crate) fn draw_shape_preview(&mut self, anchor: Point, pointer: Point) {
        let Gesture::Active { tool, style, .. } = &self.gesture else {
            return;
        };
        let tool = *tool;
        let color = style.stroke_color;
        let width = style.line_width;

        if let Some(previous) = self.shape_drawer.current_shape.take() {
            self.drawing.remove(previous);
        }
        let object = match tool {
            Tool::Line => DrawingObject::Line {
                points: [anchor, pointer],
                color,
                width,
            },
            Tool::Square => DrawingObject::Rectangle {
                corners: [anchor, pointer],
                fill: None,
                outline: Some(color),
                width,
            },
            Tool::Oval => DrawingObject::Oval {
                corners: [anchor, pointer],
                fill: None,
                outline: Some(color),
                width,
            },
            Tool::Triangle => DrawingObject::Polygon {
                vertices: triangle_vertices(anchor, pointer),
                fill: None,
                outline: Some(color),
                width,
            },
            _ => return,
        };

        self.shape_drawer.current_shape = Some(self.drawing.push(object));
    }

    /// Drops the preview handle so the committed shape is left alone and the
    /// next drag starts a fresh one.
    pub(crate) fn finish_shape_preview(&mut self) {
        self.shape_drawer.current_shape = None;
    }

    /// Adds a vertex to the polygon under construction.
    ///
    /// The first call after idle clears any stale vertex list and enters
    /// collecting mode; from the second vertex on, a preview segment from
    /// the previous vertex is drawn.
    pub(crate) fn append_polygon_vertex(&mut self, point: Point) {
        if matches!(self.shape_drawer.polygon, PolygonState::Idle) {
            self.shape_drawer.polygon = PolygonState::Collecting {
                vertices: Vec::new(),
                segments: Vec::new(),
            };
        }

        let color = self.gesture_style().stroke_color;
        let PolygonState::Collecting { vertices, segments } = &mut self.shape_drawer.polygon
        else {
            return;
        };

        if let Some(&previous) = vertices.last() {
            let segment = self.drawing.push(DrawingObject::Line {
                points: [previous, point],
                color,
                width: 1,
            });
            segments.push(segment);
        }
        vertices.push(point);
    }

    /// Closes the in-progress polygon.
    ///
    /// Requires at least two collected vertices; otherwise this is a no-op
    /// and the drawing is left untouched. On success the preview segments
    /// are removed and the full vertex list is committed as a single polygon
    /// object, returning the machine to idle.
    pub(crate) fn close_polygon(&mut self) {
        let PolygonState::Collecting { vertices, segments } =
            std::mem::take(&mut self.shape_drawer.polygon)
        else {
            return;
        };

        if vertices.len() < 2 {
            // Not enough points to form a boundary; keep whatever was there.
            self.shape_drawer.polygon = PolygonState::Collecting { vertices, segments };
            return;
        }

        for segment in segments {
            self.drawing.remove(segment);
        }

        log::debug!("polygon closed with {} vertices", vertices.len());
        self.drawing.push(DrawingObject::Polygon {
            vertices,
            fill: None,
            outline: Some(self.settings.stroke_color),
            width: self.settings.line_width,
        });
    }
}

/// Vertices of the equilateral triangle built on the anchor→pointer segment.
///
/// The third vertex is the pointer offset rotated by −60° about the anchor,
/// which fixes the triangle's chirality to one side of the segment.
pub(crate) fn triangle_vertices(anchor: Point, pointer: Point) -> Vec<Point> {
    let third = pointer.rotated_about(anchor, -std::f64::consts::FRAC_PI_3);
    vec![anchor, pointer, third]
}
