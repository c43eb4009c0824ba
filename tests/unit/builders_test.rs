//! Tests for the pool builder

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use taskloom::builders::PoolBuilder;
use taskloom::config::PoolConfig;
use taskloom::core::{ArgMap, ArgValue, InMemoryAuditSink};

#[test]
fn build_runs_init_closure_once_per_worker() {
    let ran = Arc::new(AtomicBool::new(false));
    let ran_clone = Arc::clone(&ran);

    let pool: Arc<taskloom::core::Pool<i32, i32>> = PoolBuilder::new(PoolConfig::new().with_worker_count(1))
        .with_init(move |_args: &ArgMap| {
            ran_clone.store(true, Ordering::SeqCst);
        })
        .build();

    pool.admit_worker_if_needed();
    std::thread::sleep(Duration::from_millis(50));
    assert!(ran.load(Ordering::SeqCst));
    pool.close();
}

#[test]
fn build_forwards_init_args() {
    let observed: Arc<parking_lot::Mutex<Option<String>>> = Arc::new(parking_lot::Mutex::new(None));
    let observed_clone = Arc::clone(&observed);

    let mut args = ArgMap::new();
    args.insert("k".into(), ArgValue::Text("v".into()));

    let pool: Arc<taskloom::core::Pool<i32, i32>> = PoolBuilder::new(PoolConfig::new().with_worker_count(1))
        .with_init(move |args: &ArgMap| {
            if let Some(ArgValue::Text(v)) = args.get("k") {
                *observed_clone.lock() = Some(v.clone());
            }
        })
        .with_init_args(args)
        .build();

    pool.admit_worker_if_needed();
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(observed.lock().as_deref(), Some("v"));
    pool.close();
}

#[test]
fn with_audit_sink_attaches_without_erroring() {
    let pool: Arc<taskloom::core::Pool<i32, i32>> = PoolBuilder::new(PoolConfig::new().with_worker_count(1))
        .with_audit_sink(Box::new(InMemoryAuditSink::new(16)))
        .build();

    pool.admit_worker_if_needed();
    pool.close();
}
