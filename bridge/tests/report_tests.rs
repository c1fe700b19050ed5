use bridge::{report, report_obj, report_with, List};
use host::{Interp, MockInterp, Outcome, Status};

// =============================================================================
// Success path
// =============================================================================

#[test]
fn success_without_value() {
    let mut ip = MockInterp::new();
    assert_eq!(report(&mut ip, Status::OK), Outcome::Ok);
    assert!(ip.result().is_none());
    assert!(ip.error_code().is_none());
}

#[test]
fn success_with_value_sets_result_only() {
    let mut ip = MockInterp::new();
    assert_eq!(report_with(&mut ip, Status::OK, 42i64), Outcome::Ok);
    assert_eq!(ip.result_str().as_deref(), Some("42"));
    assert!(ip.error_code().is_none());
}

// =============================================================================
// Failure path
// =============================================================================

#[test]
fn failure_without_value_clears_result_and_sets_code() {
    let mut ip = MockInterp::new();
    // A stale result from an earlier call must not leak through.
    report_with(&mut ip, Status::OK, "stale");

    assert_eq!(report(&mut ip, Status(7)), Outcome::Error);
    assert!(ip.result().is_none());
    assert_eq!(ip.error_code(), Some(Status(7)));
}

#[test]
fn failure_with_value_keeps_both_channels() {
    // Status and value are independent: a failure can still carry a
    // partial result.
    let mut ip = MockInterp::new();
    assert_eq!(report_with(&mut ip, Status(3), "partial"), Outcome::Error);
    assert_eq!(ip.result_str().as_deref(), Some("partial"));
    assert_eq!(ip.error_code(), Some(Status(3)));
}

// =============================================================================
// Handle transfer
// =============================================================================

#[test]
fn materialized_list_transfers_into_the_result_slot() {
    let mut ip = MockInterp::new();
    let obj = {
        let mut list = List::new(&mut ip, 2);
        list.push(1i64);
        list.push("two");
        list.materialize()
    };
    assert_eq!(report_obj(&mut ip, Status::OK, obj), Outcome::Ok);
    assert_eq!(ip.result_str().as_deref(), Some("1 two"));

    // The result slot holds the only reference; resetting releases the
    // composite and its elements.
    ip.reset_result();
    assert_eq!(ip.live_objects(), 0);
}

#[test]
fn reporting_replaces_a_prior_result_without_leaking() {
    let mut ip = MockInterp::new();
    report_with(&mut ip, Status::OK, "first");
    report_with(&mut ip, Status::OK, "second");
    assert_eq!(ip.result_str().as_deref(), Some("second"));
    // Only the installed result is alive.
    assert_eq!(ip.live_objects(), 1);
}
