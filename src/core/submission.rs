//! Submission (invocation): per-call state bundling a bound callable, its
//! result routing, and the ordering merger.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::debug;

use super::audit::build_audit_event;
use super::callable::{ArgMap, CallableRef, IntoBoundCallable};
use super::error::{ItemError, PoolError};
use super::item::{Item, PoolResult};
use super::merger::OrderingMerger;
use super::pool::Pool;

/// Everything produced by a submission once its input is exhausted:
/// successful values (suppressed `None`s already dropped) and item-level
/// errors, both honoring the submission's ordering mode.
#[derive(Debug)]
pub struct RunOutput<R> {
    /// Non-suppressed values, in input order if `sort = true`, otherwise
    /// completion order.
    pub values: Vec<R>,
    /// Item-level faults, interleaved with `values` in the same order they
    /// were emitted by the merger.
    pub errors: Vec<ItemError>,
}

impl<R> Default for RunOutput<R> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// A single call into a [`Pool`]: owns the bound callable, extra arguments,
/// its own result queue, and the ordering merger that restores caller order
/// when requested.
///
/// Several submissions may run concurrently against one pool; each gets its
/// own result queue so workers never cross-deliver a result to the wrong
/// caller (invariant 2 of the data model).
pub struct Submission<V, R>
where
    V: Send + 'static,
    R: Send + 'static,
{
    pool: Arc<Pool<V, R>>,
    bound_call: CallableRef<V, R>,
    extra_args: ArgMap,
    no_wait: bool,
    next_index: u64,
    received_count: u64,
    merger: OrderingMerger<R>,
    result_tx: Option<Sender<PoolResult<R>>>,
    result_rx: Option<Receiver<PoolResult<R>>>,
    /// Results already merged into order, accumulated incrementally by
    /// `submit`'s non-blocking drain and handed back whole by `finish`.
    emitted: RunOutput<R>,
}

impl<V, R> Submission<V, R>
where
    V: Send + 'static,
    R: Send + 'static,
{
    /// Begin a submission against `pool`. `no_wait = true` makes this a
    /// fire-and-forget submission: no result queue is allocated and no
    /// results are ever delivered. `no_sort = true` requests completion
    /// order instead of input order.
    pub fn begin(
        pool: Arc<Pool<V, R>>,
        callable: impl IntoBoundCallable<V, R>,
        extra_args: ArgMap,
        no_wait: bool,
        no_sort: bool,
    ) -> Self {
        let (result_tx, result_rx) = if no_wait {
            (None, None)
        } else {
            let (tx, rx) = unbounded();
            (Some(tx), Some(rx))
        };

        Self {
            pool,
            bound_call: callable.into_bound(),
            extra_args,
            no_wait,
            next_index: 0,
            received_count: 0,
            merger: OrderingMerger::new(!no_sort),
            result_tx,
            result_rx,
            emitted: RunOutput::default(),
        }
    }

    /// Enqueue one pipeline value. Triggers the admission policy, then, if
    /// this submission waits for results, performs a non-blocking drain of
    /// whatever is ready so far.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Shutdown`] if the pool was closed while this
    /// submission was still enqueuing items.
    pub fn submit(&mut self, value: V) -> Result<(), PoolError> {
        self.pool.admit_worker_if_needed();

        let item = Item {
            index: self.next_index,
            value,
            bound_call: Arc::clone(&self.bound_call),
            extra_args: self.extra_args.clone(),
            result_sink: self.result_tx.clone(),
        };
        self.pool.enqueue(item)?;
        self.next_index += 1;

        self.drain_ready();
        Ok(())
    }

    /// Submit every value from an iterator, draining ready results as it
    /// goes. Shorthand for calling [`Submission::submit`] in a loop.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Shutdown`] if the pool was closed mid-iteration;
    /// items enumerated before the failing one are still enqueued.
    pub fn submit_all(&mut self, values: impl IntoIterator<Item = V>) -> Result<(), PoolError> {
        for value in values {
            self.submit(value)?;
        }
        Ok(())
    }

    /// Non-blocking drain: move any results already sitting in the result
    /// queue through the merger and into the accumulated output.
    fn drain_ready(&mut self) {
        let Some(rx) = &self.result_rx else { return };
        while let Ok(result) = rx.try_recv() {
            self.received_count += 1;
            for ready in self.merger.on_result(result) {
                push_ready(&mut self.emitted, ready);
            }
        }
    }

    /// Finish the submission: if `no_wait`, return immediately with an
    /// empty output (no results were ever going to be delivered). Otherwise
    /// block until every submitted item has produced a result, merge them
    /// into order, and release the result queue.
    pub fn finish(mut self) -> RunOutput<R> {
        if self.no_wait {
            return RunOutput::default();
        }

        self.drain_ready();
        let total = self.next_index;

        if let Some(rx) = self.result_rx.take() {
            while self.received_count < total {
                match rx.recv() {
                    Ok(result) => {
                        self.received_count += 1;
                        for ready in self.merger.on_result(result) {
                            push_ready(&mut self.emitted, ready);
                        }
                    }
                    Err(_) => break,
                }
            }
        }

        debug!(
            received = self.received_count,
            submitted = total,
            "submission finished"
        );
        if let Some(audit) = self.pool.audit_sink() {
            audit.lock().record(build_audit_event(
                None,
                "submission_finished",
                Some(format!("received={}/{}", self.received_count, total)),
            ));
        }
        self.emitted
    }
}

fn push_ready<R>(out: &mut RunOutput<R>, result: PoolResult<R>) {
    if let Some(value) = result.value {
        out.values.push(value);
    }
    if let Some(error) = result.error {
        out.errors.push(error);
    }
}
