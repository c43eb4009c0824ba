//! Core worker-pool abstractions: callable binding, the pool itself,
//! worker threads, submissions, and the ordering merger.

pub mod audit;
pub mod callable;
pub mod error;
pub mod item;
pub mod merger;
pub mod pool;
pub mod status;
pub mod submission;
pub mod worker;

pub use audit::{build_audit_event, AuditEvent, AuditSink, InMemoryAuditSink};
pub use callable::{noop_init, ArgMap, ArgValue, CallableRef, InitFn, IntoBoundCallable, IntoInitFn};
pub use error::{AppResult, CallError, ItemError, PoolError};
pub use item::{Item, PoolResult};
pub use merger::OrderingMerger;
pub use pool::{Pool, PoolCloseState, PoolStats};
pub use status::{ThreadStatus, WorkerState};
pub use submission::{RunOutput, Submission};
