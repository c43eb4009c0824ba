//! # taskloom
//!
//! A worker-pool engine: applies a user-supplied callable to a stream of
//! input items across a fixed number of parallel workers.
//!
//! Results come back either in input order or completion order.
//!
//! ## Core problem solved
//!
//! Coordinating a bounded set of long-lived workers against a shared input
//! queue is easy to get wrong in a few specific ways:
//!
//! - **Cross-talk**: a shared result channel delivers one caller's result to
//!   another caller waiting on the same pool.
//! - **Starvation vs. over-provisioning**: spawning a worker per submission
//!   either starves under load or burns threads that sit idle.
//! - **Silent gaps**: restoring caller order from out-of-order completions
//!   without dropping or duplicating an index.
//!
//! `taskloom` solves all three: a [`Pool`](core::Pool) owns one input queue
//! shared by every [`Submission`](core::Submission), each submission gets
//! its own result queue, workers are admitted lazily and only when no
//! existing worker is idle, and an [`OrderingMerger`](core::OrderingMerger)
//! restores dense ascending order with no gaps.
//!
//! ## Quick example
//!
//! ```rust
//! use taskloom::config::PoolConfig;
//! use taskloom::core::{ArgMap, Pool};
//! use taskloom::run_on;
//!
//! let pool = Pool::new(PoolConfig::new().with_worker_count(4));
//! let out = run_on(&pool, |v: i32, _: &ArgMap| Ok(Some(v * 2)), ArgMap::new(), false, false, 0..10).unwrap();
//! assert_eq!(out.values, (0..10).map(|v| v * 2).collect::<Vec<_>>());
//! pool.close();
//! ```

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Misfires on the crate doc's module-summary block, reporting a span past
// the end of the file; see rust-clippy#12568-adjacent synthetic-span bugs.
#![allow(clippy::too_long_first_doc_paragraph)]

/// Core worker-pool abstractions: callable binding, the pool, workers,
/// submissions, and the ordering merger.
pub mod core;
/// Configuration models for the worker pool.
pub mod config;
/// Builders to construct a pool from configuration.
pub mod builders;
/// Shared utilities (clock, tracing setup).
pub mod util;

use std::sync::Arc;

use core::{ArgMap, IntoBoundCallable, Pool, PoolError, RunOutput, Submission};

/// Run `callable` over every item of `inputs` against `pool`, blocking
/// until every result has been produced, and return the materialized
/// value/error vectors.
///
/// This is the library-boundary stand-in for "output stream + error
/// stream": callers who want true incremental delivery should drive a
/// [`Submission`] directly instead (`submit` in a loop, then `finish`),
/// which is exactly what this function does internally.
///
/// - `no_wait = true` returns an empty [`RunOutput`] immediately after all
///   inputs are enqueued; no results are ever delivered. Primarily useful
///   for side-effect-only callables.
/// - `no_sort = true` yields values and errors in completion order instead
///   of input order.
///
/// # Errors
///
/// Returns [`PoolError::Shutdown`] if `pool.close()` ran while inputs were
/// still being enqueued.
pub fn run_on<V, R>(
    pool: &Arc<Pool<V, R>>,
    callable: impl IntoBoundCallable<V, R>,
    extra_args: ArgMap,
    no_wait: bool,
    no_sort: bool,
    inputs: impl IntoIterator<Item = V>,
) -> Result<RunOutput<R>, PoolError>
where
    V: Send + 'static,
    R: Send + 'static,
{
    let mut submission = Submission::begin(Arc::clone(pool), callable, extra_args, no_wait, no_sort);
    submission.submit_all(inputs)?;
    Ok(submission.finish())
}
