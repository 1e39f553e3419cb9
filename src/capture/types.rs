//! Data types for overlay export.

use thiserror::Error;

/// Errors that can occur while exporting the overlay.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// No overlay surface has ever been allocated; there is nothing to
    /// capture yet.
    #[error("no overlay snapshot is available yet")]
    SnapshotUnavailable,

    #[error("failed to save drawing: {0}")]
    SaveError(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    EncodeError(String),
}
