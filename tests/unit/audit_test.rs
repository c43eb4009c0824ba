//! Tests for the audit sink

use taskloom::core::{build_audit_event, AuditSink, InMemoryAuditSink};

#[test]
fn records_and_retrieves_events_in_order() {
    let mut sink = InMemoryAuditSink::new(10);

    sink.record(build_audit_event(Some(1), "worker_admitted", None));
    sink.record(build_audit_event(None, "submission_finished", Some("received=3/3".into())));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].subject, Some(1));
    assert_eq!(events[0].action, "worker_admitted");
    assert_eq!(events[1].detail.as_deref(), Some("received=3/3"));
}

#[test]
fn ring_buffer_drops_oldest_past_capacity() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(None, "a", None));
    sink.record(build_audit_event(None, "b", None));
    sink.record(build_audit_event(None, "c", None));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, "b");
    assert_eq!(events[1].action, "c");
}

#[test]
fn build_audit_event_stamps_a_timestamp() {
    let event = build_audit_event(None, "pool_closed", Some("workers=4".into()));
    assert_eq!(event.action, "pool_closed");
    assert_eq!(event.detail.as_deref(), Some("workers=4"));
    assert!(event.created_at_ms > 0);
}
