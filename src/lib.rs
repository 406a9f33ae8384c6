//! Library exports for reusing vectorpad subsystems.
//!
//! Exposes the canvas engine (drawing model, tool dispatch, persistence)
//! alongside the configuration structures so that external shells (a GUI
//! frontend, the bundled CLI) share the same validation and serialization
//! logic.

pub mod config;
pub mod draw;
pub mod error;
pub mod images;
pub mod input;
pub mod session;
pub mod shell;
pub mod util;

pub use config::Config;
pub use draw::{Drawing, DrawingObject};
pub use input::{CanvasController, Tool, ToolSettings};
