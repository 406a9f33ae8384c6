//! Image store boundary.
//!
//! The canvas engine never decodes pixels itself during editing; it asks an
//! [`ImageStore`] for the dimensions (and, for export, the pixels) of a
//! placed image. The filesystem implementation uses the `image` crate;
//! tests substitute a fixed store so they run without fixture files.

use crate::error::ImageError;
use std::path::Path;

/// Decoded image metadata handed back to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

/// Boundary contract for resolving image paths to displayable data.
pub trait ImageStore {
    /// Decodes enough of the file to learn its pixel dimensions.
    fn load(&self, path: &Path) -> Result<ImageInfo, ImageError>;

    /// Decodes the full pixel data for export rendering.
    fn load_pixels(&self, path: &Path) -> Result<image::RgbaImage, ImageError>;
}

/// Filesystem-backed image store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsImageStore;

impl ImageStore for FsImageStore {
    fn load(&self, path: &Path) -> Result<ImageInfo, ImageError> {
        let (width, height) =
            image::image_dimensions(path).map_err(|source| decode_error(path, source))?;
        Ok(ImageInfo { width, height })
    }

    fn load_pixels(&self, path: &Path) -> Result<image::RgbaImage, ImageError> {
        let decoded = image::open(path).map_err(|source| decode_error(path, source))?;
        Ok(decoded.into_rgba8())
    }
}

fn decode_error(path: &Path, source: image::ImageError) -> ImageError {
    match source {
        image::ImageError::IoError(io) => ImageError::Open {
            path: path.to_path_buf(),
            source: io,
        },
        other => ImageError::Decode {
            path: path.to_path_buf(),
            source: other,
        },
    }
}

/// Store that answers every lookup with fixed dimensions. Test support.
#[derive(Debug, Clone, Copy)]
pub struct FixedImageStore(pub ImageInfo);

impl ImageStore for FixedImageStore {
    fn load(&self, _path: &Path) -> Result<ImageInfo, ImageError> {
        Ok(self.0)
    }

    fn load_pixels(&self, _path: &Path) -> Result<image::RgbaImage, ImageError> {
        Ok(image::RgbaImage::new(self.0.width, self.0.height))
    }
}
