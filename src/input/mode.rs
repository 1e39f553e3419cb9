//! Draw/erase mode selection.

/// Compositing policy for stroke segments.
///
/// Selected by external UI and read by the controller on every pointer
/// update; it stays in effect for all subsequent segments until toggled
/// again. Draw lays ink over the overlay; Erase punches the stroke footprint
/// back to transparency so the background shows through the composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Paint ink over existing overlay content (source-over)
    #[default]
    Draw,
    /// Force the stroke footprint to fully transparent (clear)
    Erase,
}
