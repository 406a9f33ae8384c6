//! Flat and gradient fill tools.

use crate::draw::color::Color;
use crate::draw::DrawingObject;
use crate::util::{Point, Rect};

use super::core::CanvasController;

/// Number of interpolation bands a gradient fill is approximated with.
pub const GRADIENT_STEPS: usize = 800;

impl CanvasController {
    /// Fills the object nearest the click with the configured fill color.
    ///
    /// Non-fillable targets (a bare line, a text box, an image) are silently
    /// left unchanged, as is an empty canvas.
    pub(crate) fn fill_at(&mut self, point: Point) {
        let Some(id) = self.drawing.nearest(point) else {
            return;
        };
        let color = self.settings.fill_color;
        if let Some(object) = self.drawing.get_mut(id) {
            if object.supports_fill() {
                object.set_fill(color);
                log::debug!("filled {} with {color}", object.kind());
            }
        }
    }

    /// Gradient-fills the object nearest the click.
    ///
    /// The gradient is approximated by inserting plain drawing objects
    /// (bands, concentric ovals, or line sweeps) on top of the target, so
    /// the result persists and serializes like anything else drawn. Kinds
    /// with no gradient routine are a silent no-op.
    pub(crate) fn gradient_fill_at(&mut self, point: Point) {
        let Some(id) = self.drawing.nearest(point) else {
            return;
        };
        let (start, end) = (self.settings.gradient_start, self.settings.gradient_end);

        let Some(target) = self.drawing.get(id) else {
            return;
        };
        match target.clone() {
            DrawingObject::Rectangle { corners, .. } => {
                self.gradient_rectangle(Rect::from_corners(corners[0], corners[1]), start, end);
            }
            DrawingObject::Oval { corners, .. } => {
                self.gradient_oval(Rect::from_corners(corners[0], corners[1]), start, end);
            }
            DrawingObject::Polygon { vertices, .. } if vertices.len() == 3 => {
                self.gradient_triangle([vertices[0], vertices[1], vertices[2]], start, end);
            }
            other => {
                log::debug!("no gradient routine for {}; ignoring", other.kind());
            }
        }
    }

    /// Paints the rectangle interior as horizontal bands with linearly
    /// interpolated colors, top band = start color. The interior is inset by
    /// one pixel so the outline stays visible.
    fn gradient_rectangle(&mut self, rect: Rect, start: Color, end: Color) {
        let x1 = rect.min.x + 1.0;
        let y1 = rect.min.y + 1.0;
        let x2 = rect.max.x - 1.0;
        let y2 = rect.max.y - 1.0;
        let band_span = (y2 - y1) / GRADIENT_STEPS as f64;

        for i in 0..GRADIENT_STEPS {
            let color = start.lerp_step(end, i, GRADIENT_STEPS);
            self.drawing.push(DrawingObject::Rectangle {
                corners: [
                    Point::new(x1, y1 + i as f64 * band_span),
                    Point::new(x2, y1 + (i + 1) as f64 * band_span),
                ],
                fill: Some(color),
                outline: None,
                width: 1,
            });
        }
    }

    /// Approximates a radial gradient with concentric ovals shrinking
    /// linearly to a point; later, smaller ovals draw on top of earlier,
    /// larger ones. The boundary is restored last with an outline in the
    /// current stroke color.
    fn gradient_oval(&mut self, rect: Rect, start: Color, end: Color) {
        let center = rect.center();
        let radius_x = rect.width() / 2.0;
        let radius_y = rect.height() / 2.0;

        for i in 0..GRADIENT_STEPS {
            let color = start.lerp_step(end, i, GRADIENT_STEPS);
            let shrink = 1.0 - i as f64 / GRADIENT_STEPS as f64;
            let half_w = radius_x * shrink;
            let half_h = radius_y * shrink;
            self.drawing.push(DrawingObject::Oval {
                corners: [
                    Point::new(center.x - half_w, center.y - half_h),
                    Point::new(center.x + half_w, center.y + half_h),
                ],
                fill: Some(color),
                outline: None,
                width: 1,
            });
        }

        self.drawing.push(DrawingObject::Oval {
            corners: [rect.min, rect.max],
            fill: None,
            outline: Some(self.settings.stroke_color),
            width: 1,
        });
    }

    /// Coarse triangle gradient: at each step, three segments sweep from the
    /// first vertex toward interpolated points on the way to the second
    /// vertex. A visual approximation, not an exact scanline fill.
    fn gradient_triangle(&mut self, [v1, v2, v3]: [Point; 3], start: Color, end: Color) {
        let lerp_point = |a: Point, b: Point, i: usize| {
            Point::new(
                a.x + (b.x - a.x) * i as f64 / GRADIENT_STEPS as f64,
                a.y + (b.y - a.y) * i as f64 / GRADIENT_STEPS as f64,
            )
        };

        for i in 0..GRADIENT_STEPS {
            let color = start.lerp_step(end, i, GRADIENT_STEPS);
            let toward_v2 = lerp_point(v1, v2, i);
            let from_v3 = lerp_point(v3, v2, i);

            for points in [[v1, toward_v2], [v1, from_v3], [toward_v2, from_v3]] {
                self.drawing.push(DrawingObject::Line {
                    points,
                    color,
                    width: 1,
                });
            }
        }
    }
}
