//! Ordering merger: restores ascending input-index order over results that
//! may arrive from workers in any order.

use std::collections::BTreeMap;

use super::item::PoolResult;

/// Buffers out-of-order results keyed by submission index, emitting them in
/// strict ascending order with no gaps and no duplicates once `sort` is set.
///
/// With `sort = false` every result is emitted as soon as it arrives
/// (completion order).
pub struct OrderingMerger<R> {
    sort: bool,
    next_emit_index: u64,
    pending: BTreeMap<u64, PoolResult<R>>,
}

impl<R> OrderingMerger<R> {
    /// Create a merger. `sort = false` makes `on_result` pass results
    /// straight through in completion order.
    #[must_use]
    pub const fn new(sort: bool) -> Self {
        Self {
            sort,
            next_emit_index: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Feed one result in; returns the results now ready to emit, in
    /// ascending index order, with no gaps.
    pub fn on_result(&mut self, result: PoolResult<R>) -> Vec<PoolResult<R>> {
        if !self.sort {
            return vec![result];
        }

        self.pending.insert(result.index, result);

        let mut ready = Vec::new();
        while let Some(next) = self.pending.remove(&self.next_emit_index) {
            self.next_emit_index += 1;
            ready.push(next);
        }
        ready
    }

    /// True once every buffered result has been emitted.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.pending.is_empty()
    }
}
