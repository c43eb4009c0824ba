//! Tests for the worker status map

use taskloom::core::{ThreadStatus, WorkerState};

#[test]
fn starts_with_no_waiting_worker() {
    let status = ThreadStatus::new();
    assert!(!status.any_waiting());
    assert_eq!(status.waiting_count(), 0);
    assert_eq!(status.processing_count(), 0);
}

#[test]
fn tracks_transitions_between_waiting_and_processing() {
    let status = ThreadStatus::new();
    status.set(0, WorkerState::Waiting);
    assert!(status.any_waiting());
    assert_eq!(status.waiting_count(), 1);

    status.set(0, WorkerState::Processing);
    assert!(!status.any_waiting());
    assert_eq!(status.processing_count(), 1);
}

#[test]
fn removed_worker_no_longer_counts() {
    let status = ThreadStatus::new();
    status.set(1, WorkerState::Waiting);
    status.remove(1);
    assert!(!status.any_waiting());
    assert_eq!(status.waiting_count(), 0);
}

#[test]
fn multiple_workers_tracked_independently() {
    let status = ThreadStatus::new();
    status.set(0, WorkerState::Waiting);
    status.set(1, WorkerState::Processing);
    assert!(status.any_waiting());
    assert_eq!(status.waiting_count(), 1);
    assert_eq!(status.processing_count(), 1);
}
