//! Shared worker status map used only by the admission policy.
//!
//! Not on any correctness path for dispatch or ordering — `ThreadStatus` is
//! read by [`Pool::admit_worker_if_needed`](super::pool::Pool::admit_worker_if_needed)
//! to decide whether an idle worker should absorb new work before a fresh
//! thread is spawned.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Observed state of one worker thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// Blocked on the input queue, ready to take work immediately.
    Waiting,
    /// Running the callable for a dequeued item.
    Processing,
}

/// Concurrent map from worker id to its last-observed state.
#[derive(Debug, Default)]
pub struct ThreadStatus {
    inner: RwLock<HashMap<usize, WorkerState>>,
}

impl ThreadStatus {
    /// Create an empty status map.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Record a worker's state, inserting its entry if new.
    pub fn set(&self, worker_id: usize, state: WorkerState) {
        self.inner.write().insert(worker_id, state);
    }

    /// Remove a worker's entry, called once on thread exit.
    pub fn remove(&self, worker_id: usize) {
        self.inner.write().remove(&worker_id);
    }

    /// True if at least one worker is currently `Waiting`.
    pub fn any_waiting(&self) -> bool {
        self.inner.read().values().any(|s| *s == WorkerState::Waiting)
    }

    /// Number of workers currently `Processing`, for stats snapshots.
    pub fn processing_count(&self) -> usize {
        self.inner
            .read()
            .values()
            .filter(|s| **s == WorkerState::Processing)
            .count()
    }

    /// Number of workers currently `Waiting`, for stats snapshots.
    pub fn waiting_count(&self) -> usize {
        self.inner
            .read()
            .values()
            .filter(|s| **s == WorkerState::Waiting)
            .count()
    }
}
