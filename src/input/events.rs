//! Gesture events delivered by the input collaborator.

/// One pointer-gesture event in canvas-local coordinates.
///
/// The gesture collaborator guarantees exactly one stroke in flight at a
/// time: every `Begin` is paired with an `End` before the next `Begin`
/// arrives. The engine still tolerates out-of-order events defensively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer went down; begins a stroke at the given position.
    Begin {
        /// Canvas-local X coordinate
        x: f64,
        /// Canvas-local Y coordinate
        y: f64,
    },
    /// Pointer moved while down; extends the active stroke.
    Update {
        /// Canvas-local X coordinate
        x: f64,
        /// Canvas-local Y coordinate
        y: f64,
    },
    /// Pointer lifted; ends the active stroke.
    End,
}
