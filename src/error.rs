//! Error taxonomy for the canvas engine.
//!
//! Failures here are the ones a load report carries: malformed object
//! records (skipped record by record) and image files that could not be
//! resolved. File-level read/write failures abort the whole operation and
//! travel as `anyhow` errors with path context instead. Conditions like an
//! empty nearest-object query or a polygon close with too few vertices are
//! deliberate no-ops, not errors, and never surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while restoring object records from a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A single object record had missing or malformed data. The loader
    /// skips the record and continues; this variant is carried in the load
    /// report rather than aborting the load.
    #[error("malformed object record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// Errors produced by the image store boundary.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to open image {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
