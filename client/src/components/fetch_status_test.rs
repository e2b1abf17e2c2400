use super::*;

#[test]
fn ready_and_idle_render_nothing() {
    assert!(status_line("models", FetchPhase::Ready, false).is_none());
    assert!(status_line("models", FetchPhase::Idle, false).is_none());
}

#[test]
fn loading_names_the_resource() {
    assert_eq!(status_line("alerts", FetchPhase::Loading, false).as_deref(), Some("Loading alerts…"));
}

#[test]
fn failure_wording_depends_on_retained_data() {
    assert_eq!(status_line("alerts", FetchPhase::Failed, false).as_deref(), Some("Could not load alerts."));
    assert_eq!(
        status_line("alerts", FetchPhase::Failed, true).as_deref(),
        Some("Could not refresh alerts; showing last loaded data.")
    );
}
