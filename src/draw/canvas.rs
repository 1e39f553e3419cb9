//! The persistent overlay raster surface (Cairo-based).

use super::color::Color;
use super::segment::CurveSegment;
use super::snapshot::Snapshot;
use crate::input::DrawMode;
use cairo::{Context, Format, ImageSurface, Operator};

/// The alpha-capable raster surface strokes accumulate on.
///
/// The surface is allocated lazily on the first sizing event; until then every
/// mutating entry point is a benign no-op, so gesture events racing ahead of
/// layout are tolerated. A dimension change replaces the surface with a fresh
/// transparent one of the new size - previously drawn content is intentionally
/// discarded. Resetting clears the pixels in place without reallocating.
pub struct OverlayCanvas {
    surface: Option<ImageSurface>,
    ink: Color,
}

impl OverlayCanvas {
    /// Creates an unsized canvas using `ink` for draw-mode strokes.
    pub fn new(ink: Color) -> Self {
        Self { surface: None, ink }
    }

    /// Current surface dimensions, or `None` before the first sizing event.
    pub fn dimensions(&self) -> Option<(i32, i32)> {
        self.surface.as_ref().map(|s| (s.width(), s.height()))
    }

    /// Applies a sizing event from the window/layout collaborator.
    ///
    /// Reallocates the surface when the dimensions actually change; the new
    /// surface starts fully transparent and prior strokes are lost. Zero or
    /// oversized dimensions are rejected and leave the current surface as is.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            log::warn!("Ignoring invalid canvas size {width}x{height}");
            return;
        }
        let (width, height) = (width as i32, height as i32);
        if self.dimensions() == Some((width, height)) {
            return;
        }

        match ImageSurface::create(Format::ARgb32, width, height) {
            Ok(surface) => {
                log::debug!("Allocated {width}x{height} overlay surface");
                self.surface = Some(surface);
            }
            Err(err) => {
                log::error!("Failed to allocate {width}x{height} overlay surface: {err}");
                self.surface = None;
            }
        }
    }

    /// Strokes one smoothed segment onto the overlay.
    ///
    /// Draw-mode segments blend ink over existing content; erase-mode segments
    /// force every pixel in the stroke footprint back to full transparency,
    /// revealing the background in the final composite. No-op before the first
    /// sizing event.
    pub fn draw_segment(&mut self, segment: &CurveSegment) {
        let Some(surface) = &self.surface else {
            log::trace!("Dropping stroke segment: no overlay surface yet");
            return;
        };
        let Ok(ctx) = Context::new(surface) else {
            log::warn!("Failed to create drawing context for overlay surface");
            return;
        };

        match segment.mode {
            DrawMode::Draw => {
                ctx.set_operator(Operator::Over);
                ctx.set_source_rgba(self.ink.r, self.ink.g, self.ink.b, self.ink.a);
            }
            DrawMode::Erase => {
                ctx.set_operator(Operator::Clear);
            }
        }
        ctx.set_line_width(segment.width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);

        ctx.move_to(segment.start.x, segment.start.y);
        ctx.curve_to(
            segment.control1.x,
            segment.control1.y,
            segment.control2.x,
            segment.control2.y,
            segment.end.x,
            segment.end.y,
        );
        let _ = ctx.stroke();
    }

    /// Clears all accumulated strokes back to full transparency.
    ///
    /// Keeps the current allocation (fast path); no-op before the first sizing
    /// event.
    pub fn clear(&mut self) {
        let Some(surface) = &self.surface else {
            return;
        };
        let Ok(ctx) = Context::new(surface) else {
            return;
        };
        ctx.set_operator(Operator::Clear);
        let _ = ctx.paint();
    }

    /// Copies the current pixel contents into an immutable [`Snapshot`].
    ///
    /// Flushes pending raster commands first so the copy reflects every
    /// completed stroke segment. Returns `None` before the first sizing event.
    pub fn snapshot(&mut self) -> Option<Snapshot> {
        let surface = self.surface.as_mut()?;
        surface.flush();

        let (width, height, stride) = (surface.width(), surface.height(), surface.stride());
        let data = match surface.data() {
            Ok(data) => data.to_vec(),
            Err(err) => {
                log::warn!("Overlay surface pixels unavailable: {err}");
                return None;
            }
        };
        Some(Snapshot::new(width, height, stride, data))
    }
}
