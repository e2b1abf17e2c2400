//! Display formatting and CSS modifier helpers used by the panels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use records::{ImpactLevel, ModelStatus, Percent, Severity};

/// Inline width style for a progress bar.
#[must_use]
pub fn bar_width(p: Percent) -> String {
    format!("width: {}%", p.value())
}

#[must_use]
pub fn temperature(celsius: f64) -> String {
    format!("{celsius:.1} °C")
}

#[must_use]
pub fn salinity(psu: f64) -> String {
    format!("{psu:.1} PSU")
}

#[must_use]
pub fn depth(metres: f64) -> String {
    format!("{metres:.0} m")
}

/// `1850.0` -> `"$1.85B"`, `420.0` -> `"$420M"`.
#[must_use]
pub fn money_musd(musd: f64) -> String {
    if musd >= 1000.0 {
        format!("${:.2}B", musd / 1000.0)
    } else {
        format!("${musd:.0}M")
    }
}

#[must_use]
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "badge badge--critical",
        Severity::High => "badge badge--high",
        Severity::Moderate => "badge badge--moderate",
        Severity::Low => "badge badge--low",
    }
}

#[must_use]
pub fn impact_class(impact: ImpactLevel) -> &'static str {
    match impact {
        ImpactLevel::High => "badge badge--high",
        ImpactLevel::Medium => "badge badge--moderate",
        ImpactLevel::Low => "badge badge--low",
    }
}

#[must_use]
pub fn status_class(status: ModelStatus) -> &'static str {
    match status {
        ModelStatus::Active => "status status--active",
        ModelStatus::Training => "status status--training",
        ModelStatus::Testing => "status status--testing",
        ModelStatus::Running => "status status--running",
    }
}
