//! Tests for pool configuration

use taskloom::config::PoolConfig;

#[test]
fn new_sizes_worker_count_to_at_least_one() {
    let cfg = PoolConfig::new();
    assert!(cfg.worker_count >= 1);
}

#[test]
fn zero_worker_count_normalizes_to_one() {
    let cfg = PoolConfig::new().with_worker_count(0);
    assert_eq!(cfg.worker_count, 1);
}

#[test]
fn with_worker_count_is_honored_when_nonzero() {
    let cfg = PoolConfig::new().with_worker_count(7);
    assert_eq!(cfg.worker_count, 7);
}

#[test]
fn rejects_zero_stack_size() {
    let cfg = PoolConfig::new().with_thread_stack_size(0);
    assert!(cfg.validate().is_err());
}

#[test]
fn accepts_nonzero_stack_size() {
    let cfg = PoolConfig::new().with_thread_stack_size(4096);
    assert!(cfg.validate().is_ok());
}

#[test]
fn round_trips_through_json() {
    let cfg = PoolConfig::new().with_worker_count(4).with_channel_hint(64);
    let json = serde_json::to_string(&cfg).unwrap();
    let back: PoolConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.worker_count, 4);
    assert_eq!(back.channel_hint, 64);
}
