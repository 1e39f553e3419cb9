//! Curve smoothing: turns buffered pointer samples into cubic Bezier segments.

use super::point::Point;
use crate::input::DrawMode;
use thiserror::Error;

/// Errors produced while deriving a curve segment from buffered samples.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError {
    /// Fewer than two samples are buffered. Expected once right after a stroke
    /// begins and swallowed by the controller; never surfaced to the user.
    #[error("need at least two buffered points to smooth a segment")]
    InsufficientPoints,
}

/// One smoothed cubic Bezier segment ready for rasterization.
///
/// Derived from the sample window on each pointer-update event and discarded
/// once it has been stroked onto the overlay; segments are never retained as
/// editable objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    /// Start anchor of the curve
    pub start: Point,
    /// First control point (start tangent)
    pub control1: Point,
    /// Second control point (end tangent)
    pub control2: Point,
    /// End anchor of the curve
    pub end: Point,
    /// Stroke width in pixels
    pub width: f64,
    /// Compositing mode the segment will be stroked with
    pub mode: DrawMode,
}

/// Derives a smooth cubic Bezier segment from the 2-4 most recent samples.
///
/// Raw pointer samples drawn as a polyline look jagged at typical sampling
/// rates; this local four-point fit gives C1-continuous joins between
/// consecutive segments that share overlapping windows, with O(1) state.
///
/// The four reference points depend on how many samples are buffered, so the
/// very first segment of a stroke still has a defined tangent: with two
/// samples the first is tripled (a rounded dab at the stroke origin), with
/// three it is doubled. Control points use the Catmull-Rom tangent scale:
///
/// ```text
/// c1 = p2 + (p3 - p1) / 6
/// c2 = p3 - (p4 - p2) / 6
/// ```
///
/// Pure function: deterministic for identical input and mutates nothing.
pub fn smooth_segment(
    points: &[Point],
    width: f64,
    mode: DrawMode,
) -> Result<CurveSegment, SegmentError> {
    let (p1, p2, p3, p4) = match points {
        [] | [_] => return Err(SegmentError::InsufficientPoints),
        [a, b] => (*a, *a, *a, *b),
        [a, b, c] => (*a, *a, *b, *c),
        [a, b, c, d, ..] => (*a, *b, *c, *d),
    };

    let control1 = Point::new(p2.x + (p3.x - p1.x) / 6.0, p2.y + (p3.y - p1.y) / 6.0);
    let control2 = Point::new(p3.x - (p4.x - p2.x) / 6.0, p3.y - (p4.y - p2.y) / 6.0);

    Ok(CurveSegment {
        start: p2,
        control1,
        control2,
        end: p3,
        width,
        mode,
    })
}
