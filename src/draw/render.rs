//! Raster export of a drawing.
//!
//! Export is a flat snapshot: objects are painted in z-order onto an opaque
//! background and the transient controller overlays (highlight, marquee)
//! never appear. Fidelity follows the snapshot contract - shapes, fills, and
//! placed images are painted; text boxes contribute their frame and
//! background while glyph shaping remains with the GUI shell.

use super::color::Color;
use super::drawing::Drawing;
use super::object::DrawingObject;
use crate::images::ImageStore;
use crate::util::{Point, Rect};
use image::{Rgba, RgbaImage};
use log::warn;

/// Renders the drawing into an RGBA raster of the given size.
pub fn render_drawing(
    drawing: &Drawing,
    width: u32,
    height: u32,
    background: Color,
    images: &dyn ImageStore,
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(width.max(1), height.max(1), to_rgba(background));

    for (_, object) in drawing.iter() {
        match object {
            DrawingObject::Line { points, color, width } => {
                stroke_segment(&mut canvas, points[0], points[1], *color, *width);
            }
            DrawingObject::Rectangle {
                corners,
                fill,
                outline,
                width,
            } => {
                let rect = Rect::from_corners(corners[0], corners[1]);
                if let Some(fill) = fill {
                    fill_rect(&mut canvas, rect, *fill);
                }
                if let Some(outline) = outline {
                    stroke_rect(&mut canvas, rect, *outline, *width);
                }
            }
            DrawingObject::Oval {
                corners,
                fill,
                outline,
                width,
            } => {
                let rect = Rect::from_corners(corners[0], corners[1]);
                if let Some(fill) = fill {
                    fill_oval(&mut canvas, rect, *fill);
                }
                if let Some(outline) = outline {
                    stroke_oval(&mut canvas, rect, *outline, *width);
                }
            }
            DrawingObject::Polygon {
                vertices,
                fill,
                outline,
                width,
            } => {
                if let Some(fill) = fill {
                    fill_polygon(&mut canvas, vertices, *fill);
                }
                if let Some(outline) = outline {
                    stroke_polygon(&mut canvas, vertices, *outline, *width);
                }
            }
            DrawingObject::TextBox {
                top_left,
                width: w,
                height: h,
                text_background,
                frame_color,
                ..
            } => {
                let rect = Rect::from_corners(*top_left, top_left.translated(*w, *h));
                fill_rect(&mut canvas, rect, *text_background);
                stroke_rect(&mut canvas, rect, *frame_color, 2);
            }
            DrawingObject::Image { path, top_left, .. } => match images.load_pixels(path) {
                Ok(pixels) => blit(&mut canvas, &pixels, *top_left),
                Err(err) => warn!("skipping image during export: {err}"),
            },
        }
    }

    canvas
}

fn to_rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

fn put_pixel(canvas: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

/// Stamps a filled square of side `thickness` centered on the point; chained
/// stamps along a segment produce a thick stroke.
fn stamp(canvas: &mut RgbaImage, center: Point, color: Rgba<u8>, thickness: u32) {
    let radius = (thickness.max(1) as i64) / 2;
    let cx = center.x.round() as i64;
    let cy = center.y.round() as i64;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            put_pixel(canvas, cx + dx, cy + dy, color);
        }
    }
}

fn stroke_segment(canvas: &mut RgbaImage, a: Point, b: Point, color: Color, thickness: u32) {
    let rgba = to_rgba(color);
    let steps = a.distance_to(b).ceil() as usize;
    if steps == 0 {
        stamp(canvas, a, rgba, thickness);
        return;
    }
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let point = Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
        stamp(canvas, point, rgba, thickness);
    }
}

fn fill_rect(canvas: &mut RgbaImage, rect: Rect, color: Color) {
    let rgba = to_rgba(color);
    let y0 = rect.min.y.floor() as i64;
    let y1 = rect.max.y.ceil() as i64;
    let x0 = rect.min.x.floor() as i64;
    let x1 = rect.max.x.ceil() as i64;
    for y in y0..y1 {
        for x in x0..x1 {
            put_pixel(canvas, x, y, rgba);
        }
    }
}

fn stroke_rect(canvas: &mut RgbaImage, rect: Rect, color: Color, thickness: u32) {
    let corners = [
        rect.min,
        Point::new(rect.max.x, rect.min.y),
        rect.max,
        Point::new(rect.min.x, rect.max.y),
        rect.min,
    ];
    for pair in corners.windows(2) {
        stroke_segment(canvas, pair[0], pair[1], color, thickness);
    }
}

fn fill_oval(canvas: &mut RgbaImage, rect: Rect, color: Color) {
    let rgba = to_rgba(color);
    let center = rect.center();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let y0 = rect.min.y.floor() as i64;
    let y1 = rect.max.y.ceil() as i64;
    let x0 = rect.min.x.floor() as i64;
    let x1 = rect.max.x.ceil() as i64;
    for y in y0..y1 {
        for x in x0..x1 {
            let nx = (x as f64 + 0.5 - center.x) / rx;
            let ny = (y as f64 + 0.5 - center.y) / ry;
            if nx * nx + ny * ny <= 1.0 {
                put_pixel(canvas, x, y, rgba);
            }
        }
    }
}

fn stroke_oval(canvas: &mut RgbaImage, rect: Rect, color: Color, thickness: u32) {
    let rgba = to_rgba(color);
    let center = rect.center();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;
    // Sample the perimeter densely enough that stamps overlap.
    let steps = ((rx + ry) * std::f64::consts::PI).ceil().max(16.0) as usize;
    for i in 0..steps {
        let angle = std::f64::consts::TAU * i as f64 / steps as f64;
        let point = Point::new(center.x + rx * angle.cos(), center.y + ry * angle.sin());
        stamp(canvas, point, rgba, thickness);
    }
}

fn stroke_polygon(canvas: &mut RgbaImage, vertices: &[Point], color: Color, thickness: u32) {
    if vertices.len() < 2 {
        return;
    }
    for pair in vertices.windows(2) {
        stroke_segment(canvas, pair[0], pair[1], color, thickness);
    }
    stroke_segment(
        canvas,
        vertices[vertices.len() - 1],
        vertices[0],
        color,
        thickness,
    );
}

/// Even-odd scanline polygon fill.
fn fill_polygon(canvas: &mut RgbaImage, vertices: &[Point], color: Color) {
    let Some(bbox) = Rect::bounding(vertices) else {
        return;
    };
    if vertices.len() < 3 {
        return;
    }
    let rgba = to_rgba(color);
    let y0 = bbox.min.y.floor() as i64;
    let y1 = bbox.max.y.ceil() as i64;
    for y in y0..y1 {
        let scan_y = y as f64 + 0.5;
        let mut crossings = Vec::new();
        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[(i + 1) % vertices.len()];
            if (a.y <= scan_y && b.y > scan_y) || (b.y <= scan_y && a.y > scan_y) {
                let t = (scan_y - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(|lhs, rhs| lhs.total_cmp(rhs));
        for span in crossings.chunks_exact(2) {
            let x0 = span[0].floor() as i64;
            let x1 = span[1].ceil() as i64;
            for x in x0..x1 {
                put_pixel(canvas, x, y, rgba);
            }
        }
    }
}

fn blit(canvas: &mut RgbaImage, pixels: &RgbaImage, top_left: Point) {
    let ox = top_left.x.round() as i64;
    let oy = top_left.y.round() as i64;
    for (x, y, pixel) in pixels.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        put_pixel(canvas, ox + i64::from(x), oy + i64::from(y), *pixel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};
    use crate::images::{FixedImageStore, ImageInfo};

    fn store() -> FixedImageStore {
        FixedImageStore(ImageInfo {
            width: 4,
            height: 4,
        })
    }

    #[test]
    fn empty_drawing_renders_background_only() {
        let drawing = Drawing::new();
        let raster = render_drawing(&drawing, 8, 8, WHITE, &store());
        assert!(raster.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn filled_rectangle_paints_interior() {
        let mut drawing = Drawing::new();
        drawing.push(DrawingObject::Rectangle {
            corners: [Point::new(2.0, 2.0), Point::new(6.0, 6.0)],
            fill: Some(RED),
            outline: None,
            width: 1,
        });
        let raster = render_drawing(&drawing, 8, 8, WHITE, &store());
        assert_eq!(*raster.get_pixel(4, 4), Rgba([255, 0, 0, 255]));
        assert_eq!(*raster.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn later_objects_paint_over_earlier_ones() {
        let mut drawing = Drawing::new();
        drawing.push(DrawingObject::Rectangle {
            corners: [Point::new(0.0, 0.0), Point::new(8.0, 8.0)],
            fill: Some(RED),
            outline: None,
            width: 1,
        });
        drawing.push(DrawingObject::Rectangle {
            corners: [Point::new(0.0, 0.0), Point::new(8.0, 8.0)],
            fill: Some(BLACK),
            outline: None,
            width: 1,
        });
        let raster = render_drawing(&drawing, 8, 8, WHITE, &store());
        assert_eq!(*raster.get_pixel(4, 4), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn line_touches_its_endpoints() {
        let mut drawing = Drawing::new();
        drawing.push(DrawingObject::Line {
            points: [Point::new(0.0, 0.0), Point::new(7.0, 7.0)],
            color: BLACK,
            width: 1,
        });
        let raster = render_drawing(&drawing, 8, 8, WHITE, &store());
        assert_eq!(*raster.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*raster.get_pixel(7, 7), Rgba([0, 0, 0, 255]));
    }
}
