//! Drawing session: single owner of the overlay raster and stroke state.
//!
//! All mutation funnels through [`DrawingSession`] on one thread: gesture
//! handling writes to the overlay, the frame-clock publish loop only reads
//! from it and hands out immutable snapshots. That single-writer contract is
//! what makes a rasterized segment atomic from the publisher's point of view.

mod publisher;

#[cfg(test)]
mod tests;

pub use publisher::{SnapshotPublisher, run_publish_loop};

use crate::capture::CaptureError;
use crate::config::Config;
use crate::draw::{OverlayCanvas, Snapshot};
use crate::input::{DrawMode, GestureEvent, InputState};
use std::sync::Arc;
use tokio::sync::watch;

/// Owns the stroke controller, the overlay canvas and the snapshot publisher.
///
/// External collaborators talk to the session: the gesture source feeds
/// events, the layout collaborator reports sizing, UI toggles the draw mode
/// and triggers reset, and the display compositor subscribes to published
/// snapshots.
pub struct DrawingSession {
    input: InputState,
    canvas: OverlayCanvas,
    publisher: SnapshotPublisher,
}

impl DrawingSession {
    /// Creates an unsized session from the given configuration.
    ///
    /// The overlay surface is allocated by the first [`resize`] call; until
    /// then gesture events are tolerated but draw nothing.
    ///
    /// [`resize`]: DrawingSession::resize
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::with_defaults(
                config.drawing.pen_width,
                config.drawing.eraser_width,
            ),
            canvas: OverlayCanvas::new(config.drawing.ink()),
            publisher: SnapshotPublisher::new(),
        }
    }

    /// Routes one gesture event into the stroke state machine.
    pub fn handle_event(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Begin { x, y } => self.input.on_stroke_begin(x, y),
            GestureEvent::Update { x, y } => self.input.on_stroke_update(&mut self.canvas, x, y),
            GestureEvent::End => self.input.on_stroke_end(),
        }
    }

    /// Applies a canvas sizing event from the window/layout collaborator.
    ///
    /// A dimension change replaces the overlay surface; accumulated strokes
    /// are discarded and further segments target the new surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.resize(width, height);
    }

    /// Current overlay dimensions, or `None` before the first sizing event.
    pub fn dimensions(&self) -> Option<(i32, i32)> {
        self.canvas.dimensions()
    }

    /// Selects the compositing mode for subsequent strokes.
    pub fn set_mode(&mut self, mode: DrawMode) {
        self.input.set_mode(mode);
    }

    /// Currently selected compositing mode.
    pub fn mode(&self) -> DrawMode {
        self.input.mode()
    }

    /// Clears all accumulated strokes back to full transparency.
    pub fn reset(&mut self) {
        log::info!("Resetting overlay");
        self.canvas.clear();
    }

    /// Captures and publishes the latest snapshot; called once per frame.
    ///
    /// No-op while the overlay is unsized, so the publish loop tolerates
    /// startup races before the first sizing event.
    pub fn publish_frame(&mut self) {
        if let Some(snapshot) = self.canvas.snapshot() {
            self.publisher.publish(Arc::new(snapshot));
        }
    }

    /// Subscribes the display compositor to published snapshots.
    ///
    /// The receiver always yields the latest published snapshot; older
    /// `Arc` handles a renderer still holds remain valid until dropped.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<Snapshot>>> {
        self.publisher.subscribe()
    }

    /// Synchronous full-resolution capture for save/export.
    ///
    /// Distinct from the periodic publish path: always taken on demand, and
    /// fails with [`CaptureError::SnapshotUnavailable`] if no surface has
    /// ever been allocated.
    pub fn capture(&mut self) -> Result<Arc<Snapshot>, CaptureError> {
        self.canvas
            .snapshot()
            .map(Arc::new)
            .ok_or(CaptureError::SnapshotUnavailable)
    }

    /// Whether the publish loop should keep rescheduling itself.
    pub fn publisher_active(&self) -> bool {
        self.publisher.is_active()
    }

    /// Tears the session down: the publish loop stops within one cycle and
    /// nothing is published afterwards.
    pub fn shutdown(&self) {
        self.publisher.shutdown();
    }
}
