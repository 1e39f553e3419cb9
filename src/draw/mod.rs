//! Stroke smoothing and overlay rasterization (Cairo-based).
//!
//! This module defines the core drawing types of the engine:
//! - [`Point`] / [`PointBuffer`]: pointer samples and the bounded window the
//!   smoother reads from
//! - [`CurveSegment`] / [`smooth_segment`]: Catmull-Rom-derived cubic Bezier
//!   segments, one per pointer update
//! - [`OverlayCanvas`]: the persistent alpha surface segments are stroked onto
//! - [`Snapshot`]: immutable pixel copies handed to the display compositor

pub mod canvas;
pub mod color;
pub mod point;
pub mod segment;
pub mod snapshot;

// Re-export commonly used types at module level
pub use canvas::OverlayCanvas;
pub use color::Color;
pub use point::{Point, PointBuffer};
pub use segment::{CurveSegment, SegmentError, smooth_segment};
pub use snapshot::Snapshot;

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, RED, TRANSPARENT, WHITE, YELLOW};
