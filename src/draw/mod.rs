//! Canvas data model and raster export.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGB color with hex formatting and named constants
//! - [`DrawingObject`]: the tagged shape/text/image variants
//! - [`Drawing`]: the ordered, exclusively-owned object registry
//! - Raster export of a drawing to a PNG snapshot

pub mod color;
pub mod drawing;
pub mod object;
pub mod render;

// Re-export commonly used types at module level
pub use color::Color;
pub use drawing::{Drawing, ObjectId};
pub use object::{DrawingObject, FontSpec};
pub use render::render_drawing;

// Re-export color constants for public API
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
