use super::*;
use records::{DisasterType, Percent};

fn alert(id: &str, severity: Severity, probability: i32) -> Alert {
    Alert {
        id: id.to_owned(),
        disaster_type: DisasterType::StormSurge,
        severity,
        probability: Percent::clamped(probability),
        affected_areas: vec!["Chennai coast".to_owned()],
        recommended_actions: vec![],
    }
}

#[test]
fn select_toggles_same_alert() {
    let s = reduce(AlertsState::default(), AlertsAction::Select("a1".into()));
    assert_eq!(s.selected_alert.as_deref(), Some("a1"));
    let s = reduce(s, AlertsAction::Select("a2".into()));
    assert_eq!(s.selected_alert.as_deref(), Some("a2"));
    let s = reduce(s, AlertsAction::Select("a2".into()));
    assert!(s.selected_alert.is_none());
}

#[test]
fn changing_filter_clears_selection() {
    let s = reduce(AlertsState::default(), AlertsAction::Select("a1".into()));
    let s = reduce(s, AlertsAction::FilterSeverity(Some(Severity::High)));
    assert_eq!(s.severity_filter, Some(Severity::High));
    assert!(s.selected_alert.is_none());
}

#[test]
fn visible_alerts_filters_then_sorts_by_urgency() {
    let alerts = vec![
        alert("low", Severity::Low, 95),
        alert("crit-40", Severity::Critical, 40),
        alert("high", Severity::High, 80),
        alert("crit-90", Severity::Critical, 90),
    ];
    let all: Vec<&str> = visible_alerts(&alerts, None).iter().map(|a| a.id.as_str()).collect();
    assert_eq!(all, ["crit-90", "crit-40", "high", "low"]);

    let crit: Vec<&str> = visible_alerts(&alerts, Some(Severity::Critical))
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(crit, ["crit-90", "crit-40"]);
}

#[test]
fn count_by_severity_lists_every_level() {
    let alerts = vec![alert("a", Severity::High, 1), alert("b", Severity::High, 2)];
    let counts = count_by_severity(&alerts);
    assert_eq!(
        counts,
        vec![(Severity::Critical, 0), (Severity::High, 2), (Severity::Moderate, 0), (Severity::Low, 0)]
    );
}
