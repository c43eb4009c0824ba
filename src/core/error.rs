//! Error types for pool and submission operations.

use thiserror::Error;

/// Errors produced by `Pool` and `Submission` operations.
#[derive(Debug, Error)]
pub enum PoolError {
    /// A named callable could not be resolved to an installable handle.
    ///
    /// Typed closures bind at compile time and never hit this path; it
    /// exists for hosts that layer a dynamic registry of callables on top
    /// of `Pool`/`Submission` and need a uniform error type to report
    /// through.
    #[error("binding failed: {0}")]
    Binding(String),

    /// The operation was attempted after `Pool::close` ran.
    #[error("pool has been shut down")]
    Shutdown,

    /// Internal failure (channel disconnected unexpectedly, worker panic).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A captured fault from a single invocation of the user callable.
///
/// Carries the originating item's index so it can be routed on the error
/// stream while preserving its association with the input position, even
/// when result ordering is not requested.
#[derive(Debug, Clone, Error)]
#[error("item {index}: {message}")]
pub struct ItemError {
    /// Index of the input item that faulted.
    pub index: u64,
    /// Human-readable fault description.
    pub message: String,
}

impl ItemError {
    /// Build an `ItemError` from an index and any displayable cause.
    pub fn new(index: u64, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
        }
    }
}

/// Error raised by the user callable for a single item.
///
/// Distinct from [`ItemError`]: `CallError` is what the callable returns;
/// the worker attaches the item's index to produce an `ItemError` before
/// publishing it on a submission's result queue.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct CallError(pub String);

impl CallError {
    /// Wrap any displayable cause as a `CallError`.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Application-facing result using anyhow for higher-level contexts
/// (example binaries, benches — anywhere mixed error sources get bubbled up).
pub type AppResult<T> = Result<T, anyhow::Error>;
