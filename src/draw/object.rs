//! Drawing object definitions.

use super::color::Color;
use crate::util::{self, Point, Rect};
use std::path::PathBuf;

/// Font settings carried by a text box.
///
/// Family, size, and style are independent fields from creation onward; they
/// are never re-derived by splitting a combined font descriptor string, so
/// multi-word family names ("Times New Roman") survive round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    /// Font family name (e.g. "Arial", "Times New Roman")
    pub family: String,
    /// Point size
    pub size: u32,
    /// Style token ("", "bold", "italic", "underline")
    pub style: String,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size: 10,
            style: String::new(),
        }
    }
}

/// A drawable object on the canvas.
///
/// Each variant stores its own geometry and colors for independent rendering
/// and serialization. Coordinate order inside `points`/`vertices` is drawing
/// order and is semantically significant.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingObject {
    /// Straight segment between two points
    Line {
        points: [Point; 2],
        color: Color,
        /// Stroke thickness in pixels
        width: u32,
    },
    /// Axis-aligned rectangle defined by two opposite corners
    Rectangle {
        corners: [Point; 2],
        /// Interior color; `None` leaves the shape hollow
        fill: Option<Color>,
        /// Border color; `None` for borderless fills (gradient bands)
        outline: Option<Color>,
        width: u32,
    },
    /// Ellipse inscribed in the rectangle spanned by two opposite corners
    Oval {
        corners: [Point; 2],
        fill: Option<Color>,
        outline: Option<Color>,
        width: u32,
    },
    /// Closed polygon through `vertices` in order
    Polygon {
        vertices: Vec<Point>,
        fill: Option<Color>,
        outline: Option<Color>,
        width: u32,
    },
    /// Editable text region with its frame
    TextBox {
        top_left: Point,
        width: f64,
        height: f64,
        /// Trimmed text content (live editing happens through the controller)
        content: String,
        font: FontSpec,
        text_color: Color,
        text_background: Color,
        frame_color: Color,
    },
    /// Placed raster image, anchored at its top-left corner
    Image {
        path: PathBuf,
        top_left: Point,
        /// Decoded pixel dimensions; zero when the file could not be decoded
        pixel_width: u32,
        pixel_height: u32,
    },
}

impl DrawingObject {
    /// Short kind name matching the document record tag.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawingObject::Line { .. } => "line",
            DrawingObject::Rectangle { .. } => "rectangle",
            DrawingObject::Oval { .. } => "oval",
            DrawingObject::Polygon { .. } => "polygon",
            DrawingObject::TextBox { .. } => "text_box",
            DrawingObject::Image { .. } => "image",
        }
    }

    /// Axis-aligned bounding box. `None` only for a polygon with no vertices.
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            DrawingObject::Line { points, .. } => {
                Some(Rect::from_corners(points[0], points[1]))
            }
            DrawingObject::Rectangle { corners, .. } | DrawingObject::Oval { corners, .. } => {
                Some(Rect::from_corners(corners[0], corners[1]))
            }
            DrawingObject::Polygon { vertices, .. } => Rect::bounding(vertices),
            DrawingObject::TextBox {
                top_left,
                width,
                height,
                ..
            } => Some(Rect::from_corners(
                *top_left,
                top_left.translated(*width, *height),
            )),
            DrawingObject::Image {
                top_left,
                pixel_width,
                pixel_height,
                ..
            } => Some(Rect::from_corners(
                *top_left,
                top_left.translated(f64::from(*pixel_width), f64::from(*pixel_height)),
            )),
        }
    }

    /// Distance from `point` to this object, used by the nearest-object query.
    ///
    /// Strokes measure to their path; area shapes measure to their bounds
    /// (zero inside). Objects with no geometry report infinity so they never
    /// win the query.
    pub fn distance_to(&self, point: Point) -> f64 {
        match self {
            DrawingObject::Line { points, .. } => {
                util::point_segment_distance(point, points[0], points[1])
            }
            DrawingObject::Polygon { vertices, fill, .. } => {
                if vertices.is_empty() {
                    return f64::INFINITY;
                }
                let mut boundary = vertices.clone();
                boundary.push(vertices[0]);
                let edge = util::point_polyline_distance(point, &boundary);
                let inside = fill.is_some()
                    && Rect::bounding(vertices)
                        .is_some_and(|bbox| bbox.contains_point(point));
                if inside { 0.0 } else { edge }
            }
            _ => self
                .bounding_box()
                .map_or(f64::INFINITY, |bbox| bbox.distance_to_point(point)),
        }
    }

    /// Returns true if the object carries an interior fill color slot.
    ///
    /// Lines have no interior, text boxes and images are recolored through
    /// their own settings, so only rectangles, ovals, and polygons qualify.
    pub fn supports_fill(&self) -> bool {
        matches!(
            self,
            DrawingObject::Rectangle { .. }
                | DrawingObject::Oval { .. }
                | DrawingObject::Polygon { .. }
        )
    }

    /// Sets the interior fill color. No-op for kinds without a fill slot.
    pub fn set_fill(&mut self, color: Color) {
        match self {
            DrawingObject::Rectangle { fill, .. }
            | DrawingObject::Oval { fill, .. }
            | DrawingObject::Polygon { fill, .. } => *fill = Some(color),
            _ => {}
        }
    }

    /// Applies a stroke color and width, the per-object style editing the
    /// Select tool performs. For a line the stroke is its only color; for
    /// outlined shapes it recolors the outline. Text boxes recolor their
    /// frame; images are unaffected.
    pub fn apply_stroke(&mut self, color: Color, stroke_width: u32) {
        match self {
            DrawingObject::Line { color: c, width, .. } => {
                *c = color;
                *width = stroke_width;
            }
            DrawingObject::Rectangle { outline, width, .. }
            | DrawingObject::Oval { outline, width, .. }
            | DrawingObject::Polygon { outline, width, .. } => {
                *outline = Some(color);
                *width = stroke_width;
            }
            DrawingObject::TextBox { frame_color, .. } => *frame_color = color,
            DrawingObject::Image { .. } => {}
        }
    }

    /// Translates the object by (dx, dy).
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            DrawingObject::Line { points, .. } => {
                for p in points.iter_mut() {
                    *p = p.translated(dx, dy);
                }
            }
            DrawingObject::Rectangle { corners, .. } | DrawingObject::Oval { corners, .. } => {
                for p in corners.iter_mut() {
                    *p = p.translated(dx, dy);
                }
            }
            DrawingObject::Polygon { vertices, .. } => {
                for p in vertices.iter_mut() {
                    *p = p.translated(dx, dy);
                }
            }
            DrawingObject::TextBox { top_left, .. } | DrawingObject::Image { top_left, .. } => {
                *top_left = top_left.translated(dx, dy);
            }
        }
    }
}
