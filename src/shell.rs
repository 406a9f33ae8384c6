//! File-menu operations at the GUI boundary.
//!
//! The shell owns dialogs, widgets, and the event loop; this module is the
//! seam between that outer layer and the canvas engine. Each function here is
//! one file-menu command, expressed purely in terms of the engine and the
//! persistence layer so a headless caller (the CLI, tests) drives the exact
//! same paths as a windowed shell.

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;

use crate::draw::render_drawing;
use crate::draw::ObjectId;
use crate::images::ImageStore;
use crate::input::CanvasController;
use crate::session::{load_document, save_document, CompressionMode, LoadReport};
use crate::util::Point;

/// "New": discards the current drawing, keeping the toolbar as it is.
pub fn new_drawing(controller: &mut CanvasController) {
    controller.clear();
    info!("started new drawing");
}

/// "Open": loads a document, replacing the current drawing.
///
/// Malformed records and unreadable images are skipped rather than failing
/// the open; the returned report says what was dropped.
pub fn open_drawing(
    controller: &mut CanvasController,
    path: &Path,
    images: &dyn ImageStore,
) -> Result<LoadReport> {
    let document = load_document(path)?;
    let report = controller.deserialize(&document, images);
    if !report.is_clean() {
        warn!(
            "opened {} with {} skipped records and {} image errors",
            path.display(),
            report.skipped.len(),
            report.image_errors.len()
        );
    }
    Ok(report)
}

/// "Save": writes the current drawing to `path`.
pub fn save_drawing(
    controller: &CanvasController,
    path: &Path,
    compression: CompressionMode,
) -> Result<()> {
    save_document(&controller.serialize(), path, compression)
}

/// "Export": renders the drawing to a PNG snapshot of the given size.
pub fn export_png(
    controller: &CanvasController,
    path: &Path,
    width: u32,
    height: u32,
    images: &dyn ImageStore,
) -> Result<()> {
    let raster = render_drawing(
        &controller.drawing,
        width,
        height,
        controller.background,
        images,
    );
    raster
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("exported {}x{} PNG to {}", width, height, path.display());
    Ok(())
}

/// "Upload image": places an image file on the canvas at `at`.
///
/// The file is probed for its dimensions up front so the placed object
/// carries a real extent; an unreadable file fails the command instead of
/// placing a broken reference.
pub fn upload_image(
    controller: &mut CanvasController,
    path: &Path,
    at: Point,
    images: &dyn ImageStore,
) -> Result<ObjectId> {
    let info = images
        .load(path)
        .with_context(|| format!("failed to read image {}", path.display()))?;
    Ok(controller.insert_image(path.to_path_buf(), at, info.width, info.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::{FixedImageStore, ImageInfo};
    use tempfile::tempdir;

    #[test]
    fn save_then_open_round_trips_the_drawing() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("doc.json");
        let store = FixedImageStore(ImageInfo {
            width: 16,
            height: 16,
        });

        let mut controller = CanvasController::default();
        controller.drawing.push(crate::draw::DrawingObject::Line {
            points: [Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
            color: crate::draw::color::RED,
            width: 2,
        });
        upload_image(&mut controller, Path::new("photo.png"), Point::new(5.0, 5.0), &store)?;
        save_drawing(&controller, &path, CompressionMode::Off)?;

        let mut restored = CanvasController::default();
        let report = open_drawing(&mut restored, &path, &store)?;
        assert!(report.is_clean());
        assert_eq!(restored.drawing.len(), 2);
        Ok(())
    }

    #[test]
    fn export_writes_a_png_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.png");
        let store = FixedImageStore(ImageInfo {
            width: 4,
            height: 4,
        });

        let controller = CanvasController::default();
        export_png(&controller, &path, 32, 16, &store)?;

        let (width, height) = image::image_dimensions(&path)?;
        assert_eq!((width, height), (32, 16));
        Ok(())
    }

    #[test]
    fn new_drawing_clears_but_keeps_settings() {
        let mut controller = CanvasController::default();
        controller.settings.line_width = 7;
        controller.drawing.push(crate::draw::DrawingObject::Line {
            points: [Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            color: crate::draw::color::BLACK,
            width: 1,
        });

        new_drawing(&mut controller);
        assert!(controller.drawing.is_empty());
        assert_eq!(controller.settings.line_width, 7);
    }
}
