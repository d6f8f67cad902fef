use super::*;

#[test]
fn cancel_handle_starts_live() {
    assert!(CancelHandle::new().is_live());
}

#[test]
fn cancel_is_visible_through_clones() {
    let handle = CancelHandle::new();
    let task_copy = handle.clone();
    handle.cancel();
    assert!(!task_copy.is_live());
}

#[test]
fn issue_is_monotonic() {
    let mut seq = RequestSeq::default();
    assert_eq!(seq.issue(), 1);
    assert_eq!(seq.issue(), 2);
    assert!(seq.is_latest(2));
    assert!(!seq.is_latest(1));
}

#[test]
fn accept_in_order_responses() {
    let mut seq = RequestSeq::default();
    let first = seq.issue();
    let second = seq.issue();
    assert!(seq.accept(first));
    assert!(seq.accept(second));
}

#[test]
fn accept_drops_response_older_than_applied() {
    let mut seq = RequestSeq::default();
    let first = seq.issue();
    let second = seq.issue();
    assert!(seq.accept(second));
    assert!(!seq.accept(first));
}

#[test]
fn accept_rejects_duplicates_and_unissued() {
    let mut seq = RequestSeq::default();
    let first = seq.issue();
    assert!(seq.accept(first));
    assert!(!seq.accept(first));
    assert!(!seq.accept(7));
}
