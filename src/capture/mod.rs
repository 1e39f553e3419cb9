//! Saving the overlay to disk.
//!
//! Takes an on-demand full-resolution snapshot of the overlay, encodes it to
//! PNG, and writes it beneath the configured output directory with a
//! timestamped filename. Storage mechanics beyond the local file system (e.g.
//! photo albums, clipboards) belong to external collaborators.

mod file;
mod types;

pub use file::{ExportConfig, ensure_directory_exists, expand_tilde, generate_filename, save_drawing};
pub use types::CaptureError;

use crate::draw::Snapshot;
use crate::session::DrawingSession;
use cairo::{Format, ImageSurface};
use std::path::PathBuf;

/// Encodes a snapshot's pixels as a PNG byte stream.
pub fn encode_png(snapshot: &Snapshot) -> Result<Vec<u8>, CaptureError> {
    let surface = ImageSurface::create_for_data(
        snapshot.data().to_vec(),
        Format::ARgb32,
        snapshot.width(),
        snapshot.height(),
        snapshot.stride(),
    )
    .map_err(|err| CaptureError::EncodeError(err.to_string()))?;

    let mut encoded = Vec::new();
    surface
        .write_to_png(&mut encoded)
        .map_err(|err| CaptureError::EncodeError(err.to_string()))?;
    Ok(encoded)
}

/// Captures the session's overlay and writes it out as a PNG file.
///
/// Fails with [`CaptureError::SnapshotUnavailable`] when no overlay surface
/// has been allocated yet.
pub fn export_session(
    session: &mut DrawingSession,
    config: &ExportConfig,
) -> Result<PathBuf, CaptureError> {
    let snapshot = session.capture()?;
    let encoded = encode_png(&snapshot)?;
    save_drawing(&encoded, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::GestureEvent;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    fn drawn_session() -> DrawingSession {
        let mut session = DrawingSession::new(&Config::default());
        session.resize(64, 64);
        session.handle_event(GestureEvent::Begin { x: 10.0, y: 32.0 });
        session.handle_event(GestureEvent::Update { x: 32.0, y: 32.0 });
        session.handle_event(GestureEvent::Update { x: 54.0, y: 32.0 });
        session.handle_event(GestureEvent::End);
        session
    }

    #[test]
    fn encode_png_produces_png_stream() {
        let mut session = drawn_session();
        let snapshot = session.capture().unwrap();

        let encoded = encode_png(&snapshot).unwrap();
        assert_eq!(&encoded[..8], &PNG_MAGIC);
    }

    #[test]
    fn export_session_writes_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            save_directory: dir.path().to_path_buf(),
            filename_template: "export_test".to_string(),
            format: "png".to_string(),
        };

        let mut session = drawn_session();
        let path = export_session(&mut session, &config).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn export_before_sizing_fails_cleanly() {
        let mut session = DrawingSession::new(&Config::default());
        let result = export_session(&mut session, &ExportConfig::default());
        assert!(matches!(result, Err(CaptureError::SnapshotUnavailable)));
    }
}
