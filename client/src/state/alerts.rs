//! Disaster Warning panel state.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use records::{Alert, Severity};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertsState {
    pub severity_filter: Option<Severity>,
    pub selected_alert: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlertsAction {
    FilterSeverity(Option<Severity>),
    Select(String),
    ClearSelection,
}

#[must_use]
pub fn reduce(mut state: AlertsState, action: AlertsAction) -> AlertsState {
    match action {
        AlertsAction::FilterSeverity(severity) => {
            state.severity_filter = severity;
            state.selected_alert = None;
        }
        AlertsAction::Select(id) => {
            // Clicking the open alert collapses it.
            if state.selected_alert.as_deref() == Some(id.as_str()) {
                state.selected_alert = None;
            } else {
                state.selected_alert = Some(id);
            }
        }
        AlertsAction::ClearSelection => state.selected_alert = None,
    }
    state
}

/// Alerts matching `filter`, most urgent first.
#[must_use]
pub fn visible_alerts(alerts: &[Alert], filter: Option<Severity>) -> Vec<&Alert> {
    let mut out: Vec<&Alert> = alerts
        .iter()
        .filter(|a| filter.is_none_or(|s| a.severity == s))
        .collect();
    out.sort_by(|a, b| a.urgency_cmp(b));
    out
}

/// `(severity, count)` for every severity, critical first.
#[must_use]
pub fn count_by_severity(alerts: &[Alert]) -> Vec<(Severity, usize)> {
    Severity::ALL
        .into_iter()
        .map(|s| (s, alerts.iter().filter(|a| a.severity == s).count()))
        .collect()
}
