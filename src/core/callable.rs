//! Callable binding: turns user closures into installable, cloneable handles.
//!
//! A dynamic host resolves a named function at runtime and reconstructs it
//! inside each worker's isolated scope. A statically typed host has no such
//! problem: the closure is already visible wherever it is captured, and the
//! only job left for a "binder" is to wrap it in a thread-safe handle that
//! is cheap to clone into every item dispatched for a submission. See the
//! design notes on source pattern re-architecture for the rationale.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::error::CallError;

/// A single extra argument value forwarded to the callable alongside the
/// pipeline item, unchanged for every item of a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// UTF-8 string value.
    Text(String),
    /// Signed integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Finite mapping from argument name to value, forwarded unchanged to every
/// invocation of a bound callable for one submission. An empty map means
/// "invoke with the pipeline item only".
pub type ArgMap = BTreeMap<String, ArgValue>;

/// Opaque, thread-safe handle to a user function, reused for every item of
/// one submission. Bound once in [`Submission::begin`](super::submission::Submission::begin).
pub type CallableRef<V, R> = Arc<dyn Fn(V, &ArgMap) -> Result<Option<R>, CallError> + Send + Sync>;

/// Installation closure run once by every worker on start, before it enters
/// its consume loop. Defaults to a no-op when the pool is created without one.
pub type InitFn = Arc<dyn Fn(&ArgMap) + Send + Sync>;

/// Binds a value into a [`CallableRef`].
///
/// Blanket-implemented for any `Fn(V, &ArgMap) -> Result<Option<R>, CallError>`
/// closure that is `Send + Sync + 'static`; implementations rarely need to
/// write this trait out, just pass a closure where a `CallableRef` is wanted.
pub trait IntoBoundCallable<V, R> {
    /// Consume `self`, producing a cheaply cloneable, thread-safe callable.
    fn into_bound(self) -> CallableRef<V, R>;
}

impl<V, R, F> IntoBoundCallable<V, R> for F
where
    F: Fn(V, &ArgMap) -> Result<Option<R>, CallError> + Send + Sync + 'static,
{
    fn into_bound(self) -> CallableRef<V, R> {
        Arc::new(self)
    }
}

/// Binds a value into an [`InitFn`].
pub trait IntoInitFn {
    /// Consume `self`, producing a cheaply cloneable, thread-safe init closure.
    fn into_init(self) -> InitFn;
}

impl<F> IntoInitFn for F
where
    F: Fn(&ArgMap) + Send + Sync + 'static,
{
    fn into_init(self) -> InitFn {
        Arc::new(self)
    }
}

/// The no-op init closure used when a `Pool` is created without one.
#[must_use]
pub fn noop_init() -> InitFn {
    Arc::new(|_args: &ArgMap| {})
}
