//! Fluent builder assembling a [`Pool`] from configuration, an init
//! closure, and an optional audit sink.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::PoolConfig;
use crate::core::audit::AuditSink;
use crate::core::callable::{noop_init, ArgMap, InitFn, IntoInitFn};
use crate::core::pool::Pool;

/// Builds a [`Pool`] one option at a time, defaulting to a no-op init
/// closure and no audit sink.
pub struct PoolBuilder {
    config: PoolConfig,
    init_fn: InitFn,
    init_args: ArgMap,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl PoolBuilder {
    /// Start building from a configuration.
    #[must_use]
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            init_fn: noop_init(),
            init_args: ArgMap::new(),
            audit: None,
        }
    }

    /// Install an initialization closure, run once by every worker on
    /// start before it enters its consume loop.
    #[must_use]
    pub fn with_init(mut self, init: impl IntoInitFn) -> Self {
        self.init_fn = init.into_init();
        self
    }

    /// Arguments forwarded unchanged to the init closure.
    #[must_use]
    pub fn with_init_args(mut self, args: ArgMap) -> Self {
        self.init_args = args;
        self
    }

    /// Attach an audit sink receiving pool lifecycle events.
    #[must_use]
    pub fn with_audit_sink(mut self, sink: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Arc::new(Mutex::new(sink)));
        self
    }

    /// Finish construction.
    #[must_use]
    pub fn build<V, R>(self) -> Arc<Pool<V, R>>
    where
        V: Send + 'static,
        R: Send + 'static,
    {
        Arc::new(Pool::build(self.config, self.init_fn, self.init_args, self.audit))
    }
}
