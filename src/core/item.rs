//! Queue element and result types shared by `Pool`, worker threads, and
//! `Submission`.

use crossbeam_channel::Sender;

use super::callable::{ArgMap, CallableRef};
use super::error::ItemError;

/// One unit of work enqueued into a [`Pool`](super::pool::Pool)'s input
/// queue by a [`Submission`](super::submission::Submission).
///
/// `index` is assigned monotonically per submission starting at zero, dense
/// with no gaps — invariant 1 of the data model.
pub struct Item<V, R> {
    /// Position of this item within its owning submission.
    pub index: u64,
    /// The pipeline value to hand to the callable.
    pub value: V,
    /// The submission's bound callable, cloned once per item.
    pub bound_call: CallableRef<V, R>,
    /// Extra arguments forwarded unchanged to the callable.
    pub extra_args: ArgMap,
    /// Where to publish the result, `None` when the submission is
    /// fire-and-forget (`no_wait = true`).
    pub result_sink: Option<Sender<PoolResult<R>>>,
}

/// The outcome of invoking the callable on one item.
///
/// Exactly one of `value`/`error` is conceptually "the" outcome, but both
/// may be populated simultaneously: `value = None` marks "the callable
/// intentionally produced nothing" and is independent of whether an error
/// was also raised for the same item.
#[derive(Debug, Clone)]
pub struct PoolResult<R> {
    /// Index of the originating item.
    pub index: u64,
    /// `Some` unless the callable returned nothing.
    pub value: Option<R>,
    /// Set when the callable faulted for this item.
    pub error: Option<ItemError>,
}

impl<R> PoolResult<R> {
    /// Build a successful result.
    #[must_use]
    pub const fn ok(index: u64, value: Option<R>) -> Self {
        Self {
            index,
            value,
            error: None,
        }
    }

    /// Build a faulted result; `value` is always `None` for a fault.
    #[must_use]
    pub const fn err(index: u64, error: ItemError) -> Self {
        Self {
            index,
            value: None,
            error: Some(error),
        }
    }
}
