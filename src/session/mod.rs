//! Document serialization and on-disk persistence.

pub mod document;
pub mod storage;

pub use document::{document_from_drawing, DrawingDocument, ImageRecord, LoadReport};
pub use storage::{load_document, save_document, CompressionMode};
