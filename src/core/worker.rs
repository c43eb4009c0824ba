//! Worker thread body.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::Receiver;
use tracing::{debug, error};

use super::audit::{build_audit_event, AuditSink};
use super::callable::InitFn;
use super::error::ItemError;
use super::item::{Item, PoolResult};
use super::status::{ThreadStatus, WorkerState};

/// Run one worker's lifetime: install the init closure, then drain `task_rx`
/// until the channel disconnects (the pool closed) or `shutdown` flips.
///
/// A fault in the init closure terminates this worker only — it never
/// reaches a caller and is reported via `tracing::error!` plus, when
/// attached, the audit sink.
///
/// Every argument is owned rather than borrowed: this function is the body
/// of a spawned `'static` thread, run well after `Pool::spawn_worker`'s own
/// stack frame is gone.
#[allow(clippy::needless_pass_by_value)]
pub fn run_worker<V, R>(
    worker_id: usize,
    task_rx: Receiver<Item<V, R>>,
    status: Arc<ThreadStatus>,
    init_fn: InitFn,
    init_args: super::callable::ArgMap,
    shutdown: Arc<AtomicBool>,
    audit: Option<Arc<parking_lot::Mutex<Box<dyn AuditSink>>>>,
) where
    V: Send + 'static,
    R: Send + 'static,
{
    status.set(worker_id, WorkerState::Waiting);
    debug!(worker_id, "worker starting, running init closure");

    let init_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        init_fn(&init_args);
    }));
    if init_result.is_err() {
        error!(worker_id, "initialization closure panicked, worker exiting");
        if let Some(audit) = &audit {
            audit.lock().record(build_audit_event(
                Some(worker_id),
                "init_failed",
                None,
            ));
        }
        status.remove(worker_id);
        return;
    }

    loop {
        let Ok(item) = task_rx.recv() else {
            debug!(worker_id, "input queue closed, worker exiting");
            break;
        };

        if shutdown.load(Ordering::Acquire) {
            debug!(worker_id, "shutdown observed, worker exiting");
            break;
        }

        status.set(worker_id, WorkerState::Processing);
        let index = item.index;
        let sink = item.result_sink.clone();

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            (item.bound_call)(item.value, &item.extra_args)
        }));

        let result = match outcome {
            Ok(Ok(value)) => PoolResult::ok(index, value),
            Ok(Err(call_error)) => PoolResult::err(index, ItemError::new(index, call_error.0)),
            Err(panic) => {
                let message = panic_message(&*panic);
                PoolResult::err(index, ItemError::new(index, message))
            }
        };

        if let Some(sink) = sink {
            // Workers never close a result queue — only the owning
            // submission does. A stale sink (submission already dropped)
            // simply fails to send; the result is dropped silently.
            let _ = sink.send(result);
        }

        status.set(worker_id, WorkerState::Waiting);
    }

    status.remove(worker_id);
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    panic.downcast_ref::<&str>().map_or_else(
        || {
            panic
                .downcast_ref::<String>()
                .map_or_else(|| "callable panicked".to_string(), String::clone)
        },
        |s| (*s).to_string(),
    )
}
