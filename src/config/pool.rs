//! Worker-pool configuration.

use serde::{Deserialize, Serialize};

/// Validated configuration for a [`Pool`](crate::core::Pool).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Maximum number of concurrently live worker threads.
    ///
    /// `0` is accepted by construction and normalized to `1` — the
    /// distilled spec requires normalization here, not a validation error,
    /// so `validate` does not reject it.
    pub worker_count: usize,
    /// Stack size in bytes for each spawned worker thread.
    pub thread_stack_size: usize,
    /// Documentation-only capacity hint for the input queue. The queue
    /// itself is unbounded per spec; this value is surfaced through
    /// [`PoolStats`](crate::core::PoolStats) and audit events only.
    pub channel_hint: usize,
}

impl PoolConfig {
    /// Default stack size matching `std::thread`'s own default (2 MiB).
    pub const DEFAULT_STACK_SIZE: usize = 2 * 1024 * 1024;

    /// Build a configuration sized to the host's logical CPU count.
    #[must_use]
    pub fn new() -> Self {
        Self {
            worker_count: num_cpus::get().max(1),
            thread_stack_size: Self::DEFAULT_STACK_SIZE,
            channel_hint: 1024,
        }
    }

    /// Set the worker count. `0` is normalized to `1`.
    #[must_use]
    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count.max(1);
        self
    }

    /// Set the per-worker thread stack size, in bytes.
    #[must_use]
    pub const fn with_thread_stack_size(mut self, bytes: usize) -> Self {
        self.thread_stack_size = bytes;
        self
    }

    /// Set the documentation-only channel capacity hint.
    #[must_use]
    pub const fn with_channel_hint(mut self, hint: usize) -> Self {
        self.channel_hint = hint;
        self
    }

    /// Validate configuration values other than `worker_count`, which is
    /// normalized rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an error string if `thread_stack_size` is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.thread_stack_size == 0 {
            return Err("thread_stack_size must be greater than 0".into());
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}
