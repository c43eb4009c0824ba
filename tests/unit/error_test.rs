//! Tests for error types

use taskloom::core::{CallError, ItemError, PoolError};

#[test]
fn pool_error_shutdown_displays() {
    let err = PoolError::Shutdown;
    assert_eq!(format!("{err}"), "pool has been shut down");
}

#[test]
fn pool_error_binding_displays_message() {
    let err = PoolError::Binding("no such callable".into());
    assert_eq!(format!("{err}"), "binding failed: no such callable");
}

#[test]
fn pool_error_internal_displays_message() {
    let err = PoolError::Internal("workers gone".into());
    assert_eq!(format!("{err}"), "internal error: workers gone");
}

#[test]
fn item_error_displays_index_and_message() {
    let err = ItemError::new(3, "boom");
    assert_eq!(format!("{err}"), "item 3: boom");
    assert_eq!(err.index, 3);
    assert_eq!(err.message, "boom");
}

#[test]
fn call_error_displays_message() {
    let err = CallError::new("invalid input");
    assert_eq!(format!("{err}"), "invalid input");
}
