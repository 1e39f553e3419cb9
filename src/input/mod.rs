//! Gesture input handling and the stroke state machine.
//!
//! This module translates pointer-gesture events into smoothing and
//! rasterization calls. It owns the sample window lifecycle and the current
//! draw/erase selection; the pixels themselves live in [`crate::draw`].

pub mod events;
pub mod mode;
pub mod state;

// Re-export commonly used types at module level
pub use events::GestureEvent;
pub use mode::DrawMode;
pub use state::{InputState, StrokeState};
