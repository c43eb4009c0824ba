//! Pool: owns the input queue and worker set, admits workers lazily.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::PoolConfig;

use super::audit::{build_audit_event, AuditSink};
use super::callable::{noop_init, ArgMap, InitFn, IntoInitFn};
use super::item::Item;
use super::status::ThreadStatus;
use super::worker::run_worker;

/// Errors surfaced directly from `Pool` operations.
#[derive(Debug)]
pub enum PoolCloseState {
    /// The pool was already closed; `close` is idempotent.
    AlreadyClosed,
    /// This call performed the shutdown.
    Closed,
}

impl fmt::Display for PoolCloseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyClosed => write!(f, "pool was already closed"),
            Self::Closed => write!(f, "pool closed"),
        }
    }
}

/// Read-only snapshot of pool utilization, for observability only — never
/// used on a correctness path.
#[derive(Debug, Clone, Default)]
pub struct PoolStats {
    /// Number of live worker threads.
    pub worker_count: usize,
    /// Workers currently blocked on the input queue.
    pub waiting_workers: usize,
    /// Workers currently executing a callable.
    pub processing_workers: usize,
}

/// Owns the input queue, worker set, and initialization closure for a
/// worker-pool engine. Workers are admitted lazily; a `Pool` never exceeds
/// `max_workers` live threads.
pub struct Pool<V, R>
where
    V: Send + 'static,
    R: Send + 'static,
{
    config: PoolConfig,
    task_tx: Mutex<Option<Sender<Item<V, R>>>>,
    task_rx: Receiver<Item<V, R>>,
    status: Arc<ThreadStatus>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    admission: Mutex<()>,
    next_worker_id: AtomicUsize,
    init_fn: InitFn,
    init_args: ArgMap,
    shutdown: Arc<AtomicBool>,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl<V, R> Pool<V, R>
where
    V: Send + 'static,
    R: Send + 'static,
{
    /// Create a pool with the given configuration, no initialization
    /// closure (a no-op is installed), and no extra init arguments.
    ///
    /// `config.worker_count` is already normalized to at least 1 by
    /// [`PoolConfig`]; no workers are started until the first admission.
    #[must_use]
    pub fn new(config: PoolConfig) -> Arc<Self> {
        Arc::new(Self::build(config, noop_init(), ArgMap::new(), None))
    }

    /// Create a pool whose workers run `init` once on start, with
    /// `init_args` forwarded unchanged.
    pub fn with_init(config: PoolConfig, init: impl IntoInitFn, init_args: ArgMap) -> Arc<Self> {
        Arc::new(Self::build(config, init.into_init(), init_args, None))
    }

    /// Assemble a pool from fully resolved parts. Used by [`PoolBuilder`]
    /// to attach an audit sink before the pool is shared across threads.
    pub(crate) fn build(
        config: PoolConfig,
        init_fn: InitFn,
        init_args: ArgMap,
        audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
    ) -> Self {
        let (task_tx, task_rx) = unbounded();
        info!(
            worker_count = config.worker_count,
            "pool created, no workers started yet"
        );
        Self {
            config,
            task_tx: Mutex::new(Some(task_tx)),
            task_rx,
            status: ThreadStatus::new(),
            workers: Mutex::new(Vec::new()),
            admission: Mutex::new(()),
            next_worker_id: AtomicUsize::new(0),
            init_fn,
            init_args,
            shutdown: Arc::new(AtomicBool::new(false)),
            audit,
        }
    }

    /// Configuration this pool was created with.
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// The pool's attached audit sink, if any, for recording submission
    /// and worker lifecycle events.
    pub(crate) fn audit_sink(&self) -> Option<&Arc<Mutex<Box<dyn AuditSink>>>> {
        self.audit.as_ref()
    }

    /// Snapshot of current worker utilization.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            worker_count: self.workers.lock().len(),
            waiting_workers: self.status.waiting_count(),
            processing_workers: self.status.processing_count(),
        }
    }

    /// Admit one new worker if and only if the pool is below capacity and
    /// no existing worker is idle. Called by a submission on every enqueue.
    ///
    /// The length/idle check is done once more before a worker is actually
    /// registered, all inside `admission`'s critical section, so a benign
    /// race can admit at most the intended worker, never one over cap.
    pub fn admit_worker_if_needed(&self) {
        if self.workers.lock().len() >= self.config.worker_count || self.status.any_waiting() {
            return;
        }

        let _guard = self.admission.lock();
        let mut workers = self.workers.lock();
        if workers.len() >= self.config.worker_count || self.status.any_waiting() {
            return;
        }

        let worker_id = self.next_worker_id.fetch_add(1, Ordering::Relaxed);
        let handle = self.spawn_worker(worker_id);
        workers.push(handle);

        if let Some(audit) = &self.audit {
            audit.lock().record(build_audit_event(
                Some(worker_id),
                "worker_admitted",
                Some(format!("workers_now={}", workers.len())),
            ));
        }
        debug!(worker_id, worker_count = workers.len(), "worker admitted");
    }

    fn spawn_worker(&self, worker_id: usize) -> JoinHandle<()> {
        let task_rx = self.task_rx.clone();
        let status = Arc::clone(&self.status);
        let init_fn = Arc::clone(&self.init_fn);
        let init_args = self.init_args.clone();
        let shutdown = Arc::clone(&self.shutdown);
        let audit = self.audit.clone();
        let stack_size = self.config.thread_stack_size;

        thread::Builder::new()
            .name(format!("taskloom-worker-{worker_id}"))
            .stack_size(stack_size)
            .spawn(move || run_worker(worker_id, task_rx, status, init_fn, init_args, shutdown, audit))
            .expect("failed to spawn worker thread")
    }

    /// Enqueue one item into the shared input queue. Fails with
    /// [`PoolError::Shutdown`](super::error::PoolError::Shutdown) once
    /// `close` has run.
    pub(crate) fn enqueue(&self, item: Item<V, R>) -> Result<(), super::error::PoolError> {
        let guard = self.task_tx.lock();
        guard.as_ref().map_or(Err(super::error::PoolError::Shutdown), |tx| {
            tx.send(item)
                .map_err(|_| super::error::PoolError::Internal("workers gone".into()))
        })
    }

    /// Mark the input queue closed (no further producers), then stop and
    /// join every worker thread and release the pool's resources.
    ///
    /// Items already dequeued by a worker run to completion; items still
    /// queued are abandoned — there is no cancellation of an in-flight
    /// callable invocation.
    pub fn close(&self) -> PoolCloseState {
        if self.shutdown.swap(true, Ordering::AcqRel) {
            return PoolCloseState::AlreadyClosed;
        }

        info!("closing pool");
        {
            let mut tx = self.task_tx.lock();
            *tx = None;
        }

        let handles: Vec<JoinHandle<()>> = self.workers.lock().drain(..).collect();
        let count = handles.len();
        for handle in handles {
            if handle.join().is_err() {
                warn!("a worker thread panicked during shutdown");
            }
        }

        if let Some(audit) = &self.audit {
            audit
                .lock()
                .record(build_audit_event(None, "pool_closed", Some(format!("workers={count}"))));
        }
        info!(worker_count = count, "pool closed");
        PoolCloseState::Closed
    }
}

impl<V, R> Drop for Pool<V, R>
where
    V: Send + 'static,
    R: Send + 'static,
{
    fn drop(&mut self) {
        // Signal shutdown and drop the sender to unblock any worker
        // waiting on recv(), but don't join here — an explicit `close()`
        // is required for a graceful join. This mirrors avoiding a hang
        // when a pool is dropped with submissions still mid-flight.
        if !self.shutdown.swap(true, Ordering::AcqRel) {
            let mut tx = self.task_tx.lock();
            *tx = None;
        }
    }
}
