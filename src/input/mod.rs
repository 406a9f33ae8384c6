//! Input handling and the tool dispatch state machine.
//!
//! This module translates host pointer events into drawing actions. It holds
//! the tool settings, the per-gesture state machine, and the per-tool
//! collection state (shape previews, polygon vertices, marquee capture).

pub mod events;
pub mod settings;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use settings::ToolSettings;
pub use state::{CanvasController, Gesture};
pub use tool::Tool;
