//! Tests for the ordering merger

use taskloom::core::{OrderingMerger, PoolResult};

const fn result(index: u64) -> PoolResult<u64> {
    PoolResult::ok(index, Some(index))
}

#[test]
fn completion_order_mode_passes_results_straight_through() {
    let mut merger = OrderingMerger::new(false);
    let ready = merger.on_result(result(5));
    assert_eq!(ready.len(), 1);
    assert_eq!(ready[0].index, 5);
}

#[test]
fn sorted_mode_buffers_until_the_gap_closes() {
    let mut merger = OrderingMerger::new(true);
    assert!(merger.on_result(result(1)).is_empty());
    assert!(merger.on_result(result(2)).is_empty());

    let ready = merger.on_result(result(0));
    let indices: Vec<u64> = ready.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn is_drained_reflects_pending_buffer_state() {
    let mut merger = OrderingMerger::new(true);
    merger.on_result(result(1));
    assert!(!merger.is_drained());

    merger.on_result(result(0));
    assert!(merger.is_drained());
}
