//! Ocean Map panel state and client-side filtering over the static tables.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use records::{Float, FloatKind, ImpactLevel, Region};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Floats,
    Trajectories,
    Regions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapState {
    pub show_floats: bool,
    pub show_trajectories: bool,
    pub show_regions: bool,
    pub float_kind: Option<FloatKind>,
    pub region_impact: Option<ImpactLevel>,
    pub fishing_only: bool,
    pub selected_float: Option<String>,
}

impl Default for MapState {
    fn default() -> Self {
        Self {
            show_floats: true,
            show_trajectories: false,
            show_regions: true,
            float_kind: None,
            region_impact: None,
            fishing_only: false,
            selected_float: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapAction {
    ToggleLayer(Layer),
    FilterFloatKind(Option<FloatKind>),
    FilterRegionImpact(Option<ImpactLevel>),
    ToggleFishingOnly,
    /// `None` closes the info card.
    SelectFloat(Option<String>),
}

#[must_use]
pub fn reduce(mut state: MapState, action: MapAction) -> MapState {
    match action {
        MapAction::ToggleLayer(Layer::Floats) => {
            state.show_floats = !state.show_floats;
            if !state.show_floats {
                state.selected_float = None;
            }
        }
        MapAction::ToggleLayer(Layer::Trajectories) => state.show_trajectories = !state.show_trajectories,
        MapAction::ToggleLayer(Layer::Regions) => state.show_regions = !state.show_regions,
        MapAction::FilterFloatKind(kind) => {
            state.float_kind = kind;
            state.selected_float = None;
        }
        MapAction::FilterRegionImpact(impact) => state.region_impact = impact,
        MapAction::ToggleFishingOnly => state.fishing_only = !state.fishing_only,
        MapAction::SelectFloat(id) => state.selected_float = id,
    }
    state
}

/// Criteria applied to the float table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloatFilter {
    pub kind: Option<FloatKind>,
}

impl FloatFilter {
    #[must_use]
    pub fn matches(&self, float: &Float) -> bool {
        self.kind.is_none_or(|k| float.kind == k)
    }
}

/// Criteria applied to the region table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionFilter {
    pub impact: Option<ImpactLevel>,
    pub fishing_only: bool,
}

impl RegionFilter {
    #[must_use]
    pub fn matches(&self, region: &Region) -> bool {
        self.impact.is_none_or(|i| region.impact == i) && (!self.fishing_only || region.fishing_zone)
    }
}

impl MapState {
    #[must_use]
    pub fn float_filter(&self) -> FloatFilter {
        FloatFilter { kind: self.float_kind }
    }

    #[must_use]
    pub fn region_filter(&self) -> RegionFilter {
        RegionFilter { impact: self.region_impact, fishing_only: self.fishing_only }
    }
}

/// Matching floats in their original order.
#[must_use]
pub fn filter_floats<'a>(floats: &'a [Float], filter: &FloatFilter) -> Vec<&'a Float> {
    floats.iter().filter(|f| filter.matches(f)).collect()
}

/// Matching regions in their original order.
#[must_use]
pub fn filter_regions<'a>(regions: &'a [Region], filter: &RegionFilter) -> Vec<&'a Region> {
    regions.iter().filter(|r| filter.matches(r)).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatSummary {
    pub total: usize,
    /// Count per kind, in `FloatKind::ALL` order.
    pub by_kind: Vec<(FloatKind, usize)>,
    pub mean_temperature_c: Option<f64>,
}

#[must_use]
pub fn summarize_floats(floats: &[&Float]) -> FloatSummary {
    let by_kind = FloatKind::ALL
        .into_iter()
        .map(|k| (k, floats.iter().filter(|f| f.kind == k).count()))
        .collect();
    let mean_temperature_c = if floats.is_empty() {
        None
    } else {
        let sum: f64 = floats.iter().map(|f| f.readings.temperature_c).sum();
        #[allow(clippy::cast_precision_loss)]
        Some(sum / floats.len() as f64)
    };
    FloatSummary { total: floats.len(), by_kind, mean_temperature_c }
}

#[must_use]
pub fn total_economic_value(regions: &[&Region]) -> f64 {
    regions.iter().map(|r| r.economic_value_musd).sum()
}
