//! Frame-clock snapshot publishing.
//!
//! Snapshot production runs once per display frame, not once per pointer
//! event; decoupling the two bounds the cost of copying pixels no matter how
//! fast samples arrive. Only the newest snapshot ever matters to the display
//! compositor, so distribution is a single-slot latest-wins channel rather
//! than a queue.

use super::DrawingSession;
use crate::draw::Snapshot;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// Single-slot, latest-wins distribution point for overlay snapshots.
///
/// Each published snapshot supersedes the previous one in the slot, but the
/// superseded `Arc` stays valid for any renderer still holding it. The
/// liveness flag gates both publishing and the loop's rescheduling, so a
/// torn-down session cannot push snapshots at a consumer that is gone.
pub struct SnapshotPublisher {
    sender: watch::Sender<Option<Arc<Snapshot>>>,
    active: Arc<AtomicBool>,
}

impl SnapshotPublisher {
    /// Creates an active publisher with an empty slot.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender,
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Hands out a receiver tracking the latest published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<Snapshot>>> {
        self.sender.subscribe()
    }

    /// Publishes a snapshot as the new latest value.
    ///
    /// Ignored after shutdown.
    pub fn publish(&self, snapshot: Arc<Snapshot>) {
        if !self.is_active() {
            log::debug!("Dropping snapshot published after shutdown");
            return;
        }
        self.sender.send_replace(Some(snapshot));
    }

    /// Whether the publisher is still live.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Stops the publish loop before its next cycle.
    pub fn shutdown(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

impl Default for SnapshotPublisher {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the publish cycle at the display cadence until shutdown.
///
/// Each cycle snapshots the overlay - a no-op while it is unsized - and
/// publishes the copy. The liveness flag is rechecked around every tick, so
/// teardown stops the self-rescheduling chain within one cycle instead of
/// leaking it.
pub async fn run_publish_loop(session: Rc<RefCell<DrawingSession>>, frames_per_second: u32) {
    let period = Duration::from_secs(1) / frames_per_second.max(1);
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    log::debug!("Publish loop running at {} fps", frames_per_second.max(1));
    loop {
        if !session.borrow().publisher_active() {
            break;
        }
        ticker.tick().await;
        let mut session = session.borrow_mut();
        if !session.publisher_active() {
            break;
        }
        session.publish_frame();
    }
    log::debug!("Publish loop stopped");
}
