use super::*;

#[test]
fn default_is_idle() {
    let s = FetchState::<Vec<u8>>::default();
    assert!(s.data.is_none());
    assert!(!s.loading);
    assert!(s.error.is_none());
    assert_eq!(s.phase(), FetchPhase::Idle);
}

#[test]
fn begin_sets_loading_before_success() {
    let mut s = FetchState::default();
    let ticket = s.begin();
    assert!(s.loading);
    assert_eq!(s.phase(), FetchPhase::Loading);

    assert!(s.resolve(ticket, vec![1, 2, 3]));
    assert!(!s.loading);
    assert_eq!(s.data, Some(vec![1, 2, 3]));
    assert!(s.error.is_none());
    assert_eq!(s.phase(), FetchPhase::Ready);
}

#[test]
fn refetch_after_failure_goes_through_loading() {
    let mut s: FetchState<u32> = FetchState::default();
    let first = s.begin();
    s.fail(first, "connection refused");
    assert_eq!(s.phase(), FetchPhase::Failed);

    let second = s.begin();
    assert!(s.loading);
    assert_eq!(s.phase(), FetchPhase::Loading);
    s.resolve(second, 7);
    assert_eq!(s.phase(), FetchPhase::Ready);
    assert!(s.error.is_none());
}

#[test]
fn failure_retains_previous_data_and_reports_stale() {
    let mut s = FetchState::default();
    let t1 = s.begin();
    s.resolve(t1, "v1".to_owned());
    let t2 = s.begin();
    s.fail(t2, "upstream returned 502");

    assert_eq!(s.data.as_deref(), Some("v1"));
    assert_eq!(s.error.as_deref(), Some("upstream returned 502"));
    assert!(s.is_stale());
    assert_eq!(s.phase(), FetchPhase::Failed);
}

#[test]
fn outdated_ticket_cannot_overwrite_newer_request() {
    let mut s = FetchState::default();
    let old = s.begin();
    let new = s.begin();

    assert!(!s.resolve(old, 1));
    assert!(s.loading);
    assert!(s.data.is_none());

    assert!(s.resolve(new, 2));
    assert!(!s.fail(old, "late error"));
    assert_eq!(s.data, Some(2));
    assert!(s.error.is_none());
}

#[test]
fn settle_dispatches_on_result() {
    let mut s = FetchState::default();
    let t = s.begin();
    assert!(s.settle(t, Err::<u8, _>("boom".to_owned())));
    assert_eq!(s.error.as_deref(), Some("boom"));

    let t = s.begin();
    assert!(s.settle(t, Ok(9)));
    assert_eq!(s.data, Some(9));
    assert!(!s.is_stale());
}
