//! Display State
//!
//! Bridges sampler output to rendering surfaces and masks the pre-mount
//! phase with placeholders.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

use crate::clock::TimeSnapshot;

/// Latest snapshot plus the one-way mounted flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    mounted: bool,
    #[serde(flatten)]
    snapshot: TimeSnapshot,
}

impl DisplayState {
    /// Unmounted state holding the placeholder snapshot
    pub fn new() -> Self {
        Self {
            mounted: false,
            snapshot: TimeSnapshot::placeholder(),
        }
    }

    /// Replace the snapshot. The first call mounts the state; there is no
    /// way back to unmounted.
    pub fn apply(&mut self, snapshot: TimeSnapshot) {
        self.snapshot = snapshot;
        self.mounted = true;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// What a surface should show: placeholders until mounted, then the
    /// latest sample.
    pub fn snapshot(&self) -> &TimeSnapshot {
        &self.snapshot
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-writer, many-reader cell holding the [`DisplayState`]
///
/// Clones share the same cell. Readers subscribe and are woken whenever a
/// tick lands.
#[derive(Debug, Clone)]
pub struct SharedDisplay {
    tx: Arc<watch::Sender<DisplayState>>,
}

impl SharedDisplay {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(DisplayState::new());
        Self { tx: Arc::new(tx) }
    }

    /// Overwrite the state with a fresh snapshot and wake readers
    pub fn publish(&self, snapshot: TimeSnapshot) {
        self.tx.send_modify(|state| {
            if !state.is_mounted() {
                tracing::debug!("Display mounted");
            }
            state.apply(snapshot);
        });
    }

    /// Copy of the current state
    pub fn current(&self) -> DisplayState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.tx.subscribe()
    }
}

impl Default for SharedDisplay {
    fn default() -> Self {
        Self::new()
    }
}
