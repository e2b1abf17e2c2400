//! Business Applications panel state.

#[cfg(test)]
#[path = "business_test.rs"]
mod business_test;

use records::{BusinessInsight, ImpactLevel, Sector};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusinessState {
    /// `None` shows every sector.
    pub sector: Option<Sector>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusinessAction {
    SelectSector(Option<Sector>),
}

#[must_use]
pub fn reduce(mut state: BusinessState, action: BusinessAction) -> BusinessState {
    match action {
        BusinessAction::SelectSector(sector) => state.sector = sector,
    }
    state
}

#[must_use]
pub fn insights_for(insights: &[BusinessInsight], sector: Option<Sector>) -> Vec<&BusinessInsight> {
    insights
        .iter()
        .filter(|i| sector.is_none_or(|s| i.sector == s))
        .collect()
}

#[must_use]
pub fn high_impact_count(insights: &[&BusinessInsight]) -> usize {
    insights.iter().filter(|i| i.impact == ImpactLevel::High).count()
}
