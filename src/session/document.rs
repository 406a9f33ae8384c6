//! The persisted drawing document format.
//!
//! A document is a flat JSON object:
//!
//! ```json
//! { "objects": [ ... ], "images": [ {"path": "...", "coords": [x, y]} ] }
//! ```
//!
//! Object records are `"type"`-tagged; array order is z-order (front = end).
//! Records originate from toolkit item dumps, so numeric fields tolerate
//! string forms (`"width": "1.0"`) and optional colors use the empty string
//! for "none". Loading is record-by-record tolerant: one malformed record is
//! skipped (and reported) without aborting the rest of the load.

use crate::draw::color::{opt_hex, Color};
use crate::draw::object::{DrawingObject, FontSpec};
use crate::draw::Drawing;
use crate::error::{DocumentError, ImageError};
use crate::images::ImageStore;
use crate::input::CanvasController;
use crate::util::Point;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_FONT_SIZE: u32 = 10;

/// Self-contained, serializable form of a drawing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawingDocument {
    /// Shape and text records in z-order
    pub objects: Vec<serde_json::Value>,
    /// Placed image references (unordered; drawn above the objects on load)
    pub images: Vec<ImageRecord>,
}

/// One placed image: source path plus top-left anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub path: PathBuf,
    pub coords: [f64; 2],
}

/// Issues collected during a tolerant load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Records skipped for malformed data
    pub skipped: Vec<DocumentError>,
    /// Image files that failed to decode (placed with zero extent)
    pub image_errors: Vec<ImageError>,
    /// Objects successfully restored
    pub loaded_objects: usize,
    /// Images successfully placed
    pub loaded_images: usize,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.image_errors.is_empty()
    }
}

/// Number that may arrive as a JSON number or its string form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(f64),
    Str(String),
}

impl NumOrStr {
    fn as_u32(&self) -> Option<u32> {
        match self {
            NumOrStr::Num(n) if *n >= 0.0 => Some(*n as u32),
            NumOrStr::Str(s) => {
                let n: f64 = s.trim().parse().ok()?;
                (n >= 0.0).then(|| n as u32)
            }
            _ => None,
        }
    }
}

fn lenient_u32<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = NumOrStr::deserialize(deserializer)?;
    raw.as_u32()
        .ok_or_else(|| serde::de::Error::custom("expected a non-negative number"))
}

/// Font sizes fall back to the default instead of failing the record; a bad
/// size should not lose the text itself.
fn lenient_font_size<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = NumOrStr::deserialize(deserializer)?;
    Ok(raw.as_u32().unwrap_or(DEFAULT_FONT_SIZE))
}

fn default_width() -> u32 {
    1
}

/// Wire form of one drawing object.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ObjectRecord {
    Line {
        coords: [f64; 4],
        color: Color,
        #[serde(deserialize_with = "lenient_u32", default = "default_width")]
        width: u32,
    },
    Rectangle {
        coords: [f64; 4],
        #[serde(with = "opt_hex", default)]
        color: Option<Color>,
        #[serde(with = "opt_hex", default)]
        outline: Option<Color>,
        #[serde(deserialize_with = "lenient_u32", default = "default_width")]
        width: u32,
    },
    Oval {
        coords: [f64; 4],
        #[serde(with = "opt_hex", default)]
        color: Option<Color>,
        #[serde(with = "opt_hex", default)]
        outline: Option<Color>,
        #[serde(deserialize_with = "lenient_u32", default = "default_width")]
        width: u32,
    },
    Polygon {
        /// Flat x,y pairs in drawing order
        coords: Vec<f64>,
        #[serde(with = "opt_hex", default)]
        color: Option<Color>,
        #[serde(with = "opt_hex", default)]
        outline: Option<Color>,
        #[serde(deserialize_with = "lenient_u32", default = "default_width")]
        width: u32,
    },
    TextBox {
        text_content: String,
        #[serde(deserialize_with = "lenient_font_size")]
        font_size: u32,
        font_type: String,
        font_style: String,
        text_color: Color,
        text_bg_color: Color,
        frame_color: Color,
        coord_x: f64,
        coord_y: f64,
        text_width: f64,
        text_height: f64,
    },
}

impl ObjectRecord {
    fn from_object(object: &DrawingObject) -> Option<ObjectRecord> {
        let flat = |a: Point, b: Point| [a.x, a.y, b.x, b.y];
        match object {
            DrawingObject::Line { points, color, width } => Some(ObjectRecord::Line {
                coords: flat(points[0], points[1]),
                color: *color,
                width: *width,
            }),
            DrawingObject::Rectangle {
                corners,
                fill,
                outline,
                width,
            } => Some(ObjectRecord::Rectangle {
                coords: flat(corners[0], corners[1]),
                color: *fill,
                outline: *outline,
                width: *width,
            }),
            DrawingObject::Oval {
                corners,
                fill,
                outline,
                width,
            } => Some(ObjectRecord::Oval {
                coords: flat(corners[0], corners[1]),
                color: *fill,
                outline: *outline,
                width: *width,
            }),
            DrawingObject::Polygon {
                vertices,
                fill,
                outline,
                width,
            } => Some(ObjectRecord::Polygon {
                coords: vertices.iter().flat_map(|p| [p.x, p.y]).collect(),
                color: *fill,
                outline: *outline,
                width: *width,
            }),
            DrawingObject::TextBox {
                top_left,
                width,
                height,
                content,
                font,
                text_color,
                text_background,
                frame_color,
            } => Some(ObjectRecord::TextBox {
                text_content: content.trim().to_string(),
                font_size: font.size,
                font_type: font.family.clone(),
                font_style: font.style.clone(),
                text_color: *text_color,
                text_bg_color: *text_background,
                frame_color: *frame_color,
                coord_x: top_left.x,
                coord_y: top_left.y,
                text_width: *width,
                text_height: *height,
            }),
            // Images serialize through the document's separate images array.
            DrawingObject::Image { .. } => None,
        }
    }

    fn into_object(self) -> Result<DrawingObject, String> {
        let pair = |coords: &[f64; 4]| {
            [
                Point::new(coords[0], coords[1]),
                Point::new(coords[2], coords[3]),
            ]
        };
        match self {
            ObjectRecord::Line { coords, color, width } => Ok(DrawingObject::Line {
                points: pair(&coords),
                color,
                width,
            }),
            ObjectRecord::Rectangle {
                coords,
                color,
                outline,
                width,
            } => Ok(DrawingObject::Rectangle {
                corners: pair(&coords),
                fill: color,
                outline,
                width,
            }),
            ObjectRecord::Oval {
                coords,
                color,
                outline,
                width,
            } => Ok(DrawingObject::Oval {
                corners: pair(&coords),
                fill: color,
                outline,
                width,
            }),
            ObjectRecord::Polygon {
                coords,
                color,
                outline,
                width,
            } => {
                if coords.len() % 2 != 0 || coords.len() < 4 {
                    return Err(format!(
                        "polygon needs an even coordinate list of at least 2 points, got {}",
                        coords.len()
                    ));
                }
                let vertices = coords
                    .chunks_exact(2)
                    .map(|xy| Point::new(xy[0], xy[1]))
                    .collect();
                Ok(DrawingObject::Polygon {
                    vertices,
                    fill: color,
                    outline,
                    width,
                })
            }
            ObjectRecord::TextBox {
                text_content,
                font_size,
                font_type,
                font_style,
                text_color,
                text_bg_color,
                frame_color,
                coord_x,
                coord_y,
                text_width,
                text_height,
            } => Ok(DrawingObject::TextBox {
                top_left: Point::new(coord_x, coord_y),
                width: text_width,
                height: text_height,
                content: text_content,
                font: FontSpec {
                    family: font_type,
                    size: font_size,
                    style: font_style,
                },
                text_color,
                text_background: text_bg_color,
                frame_color,
            }),
        }
    }
}

/// Serializes a drawing into its document form, walking objects in z-order.
pub fn document_from_drawing(drawing: &Drawing) -> DrawingDocument {
    let mut document = DrawingDocument::default();
    for (_, object) in drawing.iter() {
        if let DrawingObject::Image { path, top_left, .. } = object {
            document.images.push(ImageRecord {
                path: path.clone(),
                coords: [top_left.x, top_left.y],
            });
            continue;
        }
        match ObjectRecord::from_object(object).map(serde_json::to_value) {
            Some(Ok(value)) => document.objects.push(value),
            Some(Err(err)) => warn!("failed to encode {} record: {err}", object.kind()),
            None => {}
        }
    }
    document
}

impl CanvasController {
    /// Serializes the current drawing. Transient overlays (selection
    /// highlight, marquee) are controller state, not objects, so they never
    /// appear in the document.
    pub fn serialize(&self) -> DrawingDocument {
        document_from_drawing(&self.drawing)
    }

    /// Replaces the drawing with the document's contents.
    ///
    /// Objects are restored in document order, preserving z-order; images
    /// are placed above them. Malformed records are skipped individually and
    /// image decode failures placed with zero extent; both are collected in
    /// the returned report rather than aborting the load.
    pub fn deserialize(
        &mut self,
        document: &DrawingDocument,
        images: &dyn ImageStore,
    ) -> LoadReport {
        self.drawing.clear();
        self.reset_transient_state();
        let mut report = LoadReport::default();

        for (index, value) in document.objects.iter().enumerate() {
            match serde_json::from_value::<ObjectRecord>(value.clone()) {
                Ok(record) => match record.into_object() {
                    Ok(object) => {
                        let is_text = matches!(object, DrawingObject::TextBox { .. });
                        let id = self.drawing.push(object);
                        if is_text {
                            self.register_text_box(id);
                        }
                        report.loaded_objects += 1;
                    }
                    Err(reason) => {
                        warn!("skipping object record {index}: {reason}");
                        report
                            .skipped
                            .push(DocumentError::MalformedRecord { index, reason });
                    }
                },
                Err(err) => {
                    warn!("skipping object record {index}: {err}");
                    report.skipped.push(DocumentError::MalformedRecord {
                        index,
                        reason: err.to_string(),
                    });
                }
            }
        }

        for record in &document.images {
            let top_left = Point::new(record.coords[0], record.coords[1]);
            match images.load(&record.path) {
                Ok(info) => {
                    self.insert_image(record.path.clone(), top_left, info.width, info.height);
                    report.loaded_images += 1;
                }
                Err(err) => {
                    // Reported, non-fatal: keep the reference so a later save
                    // does not silently drop the image.
                    warn!("image failed to load: {err}");
                    self.insert_image(record.path.clone(), top_left, 0, 0);
                    report.image_errors.push(err);
                }
            }
        }

        self.needs_redraw = true;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::{FixedImageStore, ImageInfo};
    use serde_json::json;

    fn store() -> FixedImageStore {
        FixedImageStore(ImageInfo {
            width: 32,
            height: 24,
        })
    }

    #[test]
    fn width_accepts_numeric_string_form() {
        let document = DrawingDocument {
            objects: vec![json!({
                "type": "line",
                "coords": [0.0, 0.0, 5.0, 5.0],
                "color": "#000000",
                "width": "2.0"
            })],
            images: Vec::new(),
        };
        let mut controller = CanvasController::default();
        let report = controller.deserialize(&document, &store());
        assert!(report.is_clean());

        let (_, object) = controller.drawing.iter().next().unwrap();
        let DrawingObject::Line { width, .. } = object else {
            panic!("expected a line");
        };
        assert_eq!(*width, 2);
    }

    #[test]
    fn empty_color_string_means_hollow() {
        let document = DrawingDocument {
            objects: vec![json!({
                "type": "rectangle",
                "coords": [0.0, 0.0, 10.0, 10.0],
                "color": "",
                "outline": "#ff0000",
                "width": 1
            })],
            images: Vec::new(),
        };
        let mut controller = CanvasController::default();
        controller.deserialize(&document, &store());

        let (_, object) = controller.drawing.iter().next().unwrap();
        let DrawingObject::Rectangle { fill, outline, .. } = object else {
            panic!("expected a rectangle");
        };
        assert_eq!(*fill, None);
        assert_eq!(outline.map(|c| c.to_string()), Some("#ff0000".into()));
    }

    #[test]
    fn bad_font_size_keeps_the_text() {
        let document = DrawingDocument {
            objects: vec![json!({
                "type": "text_box",
                "text_content": "note",
                "font_size": "huge",
                "font_type": "Arial",
                "font_style": "",
                "text_color": "#000000",
                "text_bg_color": "#ffffff",
                "frame_color": "#000000",
                "coord_x": 1.0,
                "coord_y": 2.0,
                "text_width": 40.0,
                "text_height": 20.0
            })],
            images: Vec::new(),
        };
        let mut controller = CanvasController::default();
        let report = controller.deserialize(&document, &store());
        assert!(report.is_clean());
        assert_eq!(controller.text_boxes().len(), 1);

        let (_, object) = controller.drawing.iter().next().unwrap();
        let DrawingObject::TextBox { content, font, .. } = object else {
            panic!("expected a text box");
        };
        assert_eq!(content, "note");
        assert_eq!(font.size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn malformed_record_is_skipped_without_aborting() {
        let document = DrawingDocument {
            objects: vec![
                json!({"type": "spiral", "coords": [0.0, 0.0]}),
                json!({
                    "type": "oval",
                    "coords": [0.0, 0.0, 8.0, 8.0],
                    "color": "",
                    "outline": "#000000",
                    "width": 1
                }),
            ],
            images: Vec::new(),
        };
        let mut controller = CanvasController::default();
        let report = controller.deserialize(&document, &store());

        assert_eq!(report.loaded_objects, 1);
        assert_eq!(report.skipped.len(), 1);
        assert!(matches!(
            report.skipped[0],
            DocumentError::MalformedRecord { index: 0, .. }
        ));
        assert_eq!(controller.drawing.len(), 1);
    }

    #[test]
    fn odd_polygon_coordinate_list_is_rejected() {
        let document = DrawingDocument {
            objects: vec![json!({
                "type": "polygon",
                "coords": [0.0, 0.0, 5.0],
                "color": "",
                "outline": "#000000",
                "width": 1
            })],
            images: Vec::new(),
        };
        let mut controller = CanvasController::default();
        let report = controller.deserialize(&document, &store());
        assert_eq!(report.loaded_objects, 0);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn images_are_placed_above_restored_objects() {
        let document = DrawingDocument {
            objects: vec![json!({
                "type": "line",
                "coords": [0.0, 0.0, 5.0, 5.0],
                "color": "#000000",
                "width": 1
            })],
            images: vec![ImageRecord {
                path: PathBuf::from("photo.png"),
                coords: [10.0, 20.0],
            }],
        };
        let mut controller = CanvasController::default();
        let report = controller.deserialize(&document, &store());
        assert_eq!(report.loaded_images, 1);

        let kinds: Vec<_> = controller
            .drawing
            .iter()
            .map(|(_, object)| object.kind())
            .collect();
        assert_eq!(kinds, vec!["line", "image"]);

        let (_, image) = controller.drawing.iter().last().unwrap();
        let DrawingObject::Image {
            top_left,
            pixel_width,
            pixel_height,
            ..
        } = image
        else {
            panic!("expected the image");
        };
        assert_eq!(*top_left, Point::new(10.0, 20.0));
        assert_eq!((*pixel_width, *pixel_height), (32, 24));
    }
}
