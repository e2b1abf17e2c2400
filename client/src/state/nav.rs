//! View shell state: the selected view plus one state object per panel.
//!
//! DESIGN
//! ======
//! The shell owns every panel's state so switching views never loses a
//! panel's tab, filter, or training progress. Panels receive their slice
//! read-only and request changes by dispatching an [`Action`]; [`reduce`] is
//! the only place state changes.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use super::alerts::{self, AlertsAction, AlertsState};
use super::business::{self, BusinessAction, BusinessState};
use super::education::{self, EducationAction, EducationState};
use super::insights::{self, InsightsAction, InsightsState};
use super::map::{self, MapAction, MapState};

/// The enumerated set of dashboard views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    AiInsights,
    OceanMap,
    DisasterWarning,
    BusinessApplications,
    EducationHub,
}

impl View {
    pub const ALL: [Self; 5] = [
        Self::AiInsights,
        Self::OceanMap,
        Self::DisasterWarning,
        Self::BusinessApplications,
        Self::EducationHub,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AiInsights => "AI Insights",
            Self::OceanMap => "Ocean Map",
            Self::DisasterWarning => "Disaster Warning",
            Self::BusinessApplications => "Business Applications",
            Self::EducationHub => "Education Hub",
        }
    }

    /// URL-hash slug, e.g. `ocean-map`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::AiInsights => "ai-insights",
            Self::OceanMap => "ocean-map",
            Self::DisasterWarning => "disaster-warning",
            Self::BusinessApplications => "business",
            Self::EducationHub => "education",
        }
    }

    /// Parse a slug, tolerating a leading `#`.
    #[must_use]
    pub fn from_slug(raw: &str) -> Option<Self> {
        let slug = raw.strip_prefix('#').unwrap_or(raw);
        Self::ALL.into_iter().find(|v| v.slug() == slug)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub view: View,
    pub insights: InsightsState,
    pub alerts: AlertsState,
    pub business: BusinessState,
    pub education: EducationState,
    pub map: MapState,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SelectView(View),
    Insights(InsightsAction),
    Alerts(AlertsAction),
    Business(BusinessAction),
    Education(EducationAction),
    Map(MapAction),
}

/// Apply one action. Each panel action touches only that panel's slice.
#[must_use]
pub fn reduce(mut state: DashboardState, action: Action) -> DashboardState {
    match action {
        Action::SelectView(view) => state.view = view,
        Action::Insights(a) => state.insights = insights::reduce(state.insights, a),
        Action::Alerts(a) => state.alerts = alerts::reduce(state.alerts, a),
        Action::Business(a) => state.business = business::reduce(state.business, a),
        Action::Education(a) => state.education = education::reduce(state.education, a),
        Action::Map(a) => state.map = map::reduce(state.map, a),
    }
    state
}

impl DashboardState {
    /// Whether `view`'s panel is the one rendered.
    #[must_use]
    pub fn is_visible(&self, view: View) -> bool {
        self.view == view
    }

    /// In-place form of [`reduce`] for use inside signal updates.
    pub fn dispatch(&mut self, action: Action) {
        *self = reduce(std::mem::take(self), action);
    }
}
