mod core;
mod fill;
mod mouse;
mod ops;
mod select;
mod shapes;
mod text;

pub use core::{CanvasController, Gesture};
