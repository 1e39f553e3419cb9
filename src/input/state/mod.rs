//! Stroke state machine driven by gesture events.

#[cfg(test)]
mod tests;

use crate::draw::{OverlayCanvas, Point, PointBuffer, SegmentError, smooth_segment};
use crate::input::DrawMode;

/// Current stroke state machine.
///
/// Tracks whether a pointer gesture is in flight. Transitions happen on
/// begin/update/end events; there is no other state to carry between strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    /// No stroke in flight - waiting for a begin event
    Idle,
    /// Pointer is down and samples are streaming in
    Stroking,
}

/// Stroke controller: owns the sample window and drives smoothing.
///
/// Holds the draw/erase selection and the per-mode stroke widths. Side
/// effects are confined to the sample window and the overlay canvas passed
/// into each update; the controller itself carries no pixel data.
pub struct InputState {
    /// Current stroke state machine
    pub state: StrokeState,
    /// Sample window for the in-progress stroke
    pub points: PointBuffer,
    /// Externally selected compositing mode
    mode: DrawMode,
    /// Pen stroke width in pixels for draw mode
    pen_width: f64,
    /// Eraser stroke width in pixels; deliberately coarser than the pen
    eraser_width: f64,
}

impl InputState {
    /// Creates a controller with the given per-mode stroke widths.
    ///
    /// Starts idle in draw mode with an empty sample window.
    pub fn with_defaults(pen_width: f64, eraser_width: f64) -> Self {
        Self {
            state: StrokeState::Idle,
            points: PointBuffer::new(),
            mode: DrawMode::Draw,
            pen_width,
            eraser_width,
        }
    }

    /// Currently selected compositing mode.
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Applies the externally selected compositing mode.
    ///
    /// Affects all subsequent segments until toggled again; a stroke already
    /// in flight continues with the new mode from its next update.
    pub fn set_mode(&mut self, mode: DrawMode) {
        if self.mode != mode {
            log::debug!("Switching to {mode:?} mode");
            self.mode = mode;
        }
    }

    /// Stroke width for the current mode.
    ///
    /// Erasing uses a larger fixed width than painting: the eraser is a
    /// coarse corrective tool.
    pub fn stroke_width(&self) -> f64 {
        match self.mode {
            DrawMode::Draw => self.pen_width,
            DrawMode::Erase => self.eraser_width,
        }
    }

    /// Begins a new stroke at the given sample.
    ///
    /// Reseeds the sample window to exactly one point. Nothing is rasterized
    /// yet - one sample cannot form a segment - so a pure tap leaves the
    /// overlay untouched. A begin while already stroking is ignored; the
    /// gesture collaborator should never deliver one.
    pub fn on_stroke_begin(&mut self, x: f64, y: f64) {
        if self.state != StrokeState::Idle {
            log::warn!("Stroke begin while already stroking; ignoring");
            return;
        }
        self.points.reset(Point::new(x, y));
        self.state = StrokeState::Stroking;
        log::trace!("Stroke began at ({x:.1}, {y:.1})");
    }

    /// Feeds one pointer-move sample and rasterizes the smoothed segment.
    ///
    /// Updates while idle are ignored. The first update after a begin leaves
    /// the window at length two and already produces a (degenerate) segment;
    /// the smoother only fails when the window holds fewer than two samples,
    /// which is swallowed here.
    pub fn on_stroke_update(&mut self, canvas: &mut OverlayCanvas, x: f64, y: f64) {
        if self.state != StrokeState::Stroking {
            return;
        }
        self.points.push(Point::new(x, y));

        match smooth_segment(self.points.as_slice(), self.stroke_width(), self.mode) {
            Ok(segment) => canvas.draw_segment(&segment),
            // Expected only directly after begin; nothing to draw yet.
            Err(SegmentError::InsufficientPoints) => {}
        }
    }

    /// Ends the active stroke and empties the sample window.
    ///
    /// No further rasterization happens; an end while idle is ignored.
    pub fn on_stroke_end(&mut self) {
        if self.state != StrokeState::Stroking {
            return;
        }
        self.points.clear();
        self.state = StrokeState::Idle;
        log::trace!("Stroke ended");
    }
}
