use super::*;

#[test]
fn default_state_mounts_only_ai_insights() {
    let state = DashboardState::default();
    assert_eq!(mounted_views(&state), vec![View::AiInsights]);
}

#[test]
fn selecting_each_view_mounts_exactly_that_panel() {
    for view in View::ALL {
        let mut state = DashboardState::default();
        state.dispatch(Action::SelectView(view));
        assert_eq!(mounted_views(&state), vec![view], "selected {view:?}");
    }
}

#[test]
fn panel_state_survives_switching_views() {
    use crate::state::alerts::AlertsAction;
    use records::Severity;

    let mut state = DashboardState::default();
    state.dispatch(Action::SelectView(View::DisasterWarning));
    state.dispatch(Action::Alerts(AlertsAction::FilterSeverity(Some(Severity::High))));
    state.dispatch(Action::SelectView(View::OceanMap));
    state.dispatch(Action::SelectView(View::DisasterWarning));

    assert_eq!(state.alerts.severity_filter, Some(Severity::High));
    assert_eq!(mounted_views(&state), vec![View::DisasterWarning]);
}
