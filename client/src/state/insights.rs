//! AI Insights panel state: category tabs, model details, training runs.

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

use std::collections::BTreeMap;

use records::{ImpactLevel, Model, ModelStatus, Pattern, Percent, Prediction};

use super::progress::TrainingRun;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InsightCategory {
    #[default]
    Models,
    Patterns,
    Predictions,
}

impl InsightCategory {
    pub const ALL: [Self; 3] = [Self::Models, Self::Patterns, Self::Predictions];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Models => "AI Models",
            Self::Patterns => "Detected Patterns",
            Self::Predictions => "Predictions",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsightsState {
    pub category: InsightCategory,
    pub selected_model: Option<String>,
    pub show_details: bool,
    pub pattern_impact: Option<ImpactLevel>,
    /// Local simulated runs keyed by model id.
    pub training: BTreeMap<String, TrainingRun>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InsightsAction {
    SelectCategory(InsightCategory),
    OpenModel(String),
    CloseDetails,
    FilterPatterns(Option<ImpactLevel>),
    StartTraining(String),
    TickTraining { model_id: String, step: u8 },
}

#[must_use]
pub fn reduce(mut state: InsightsState, action: InsightsAction) -> InsightsState {
    match action {
        InsightsAction::SelectCategory(category) => {
            state.category = category;
            state.show_details = false;
        }
        InsightsAction::OpenModel(id) => {
            state.selected_model = Some(id);
            state.show_details = true;
        }
        InsightsAction::CloseDetails => state.show_details = false,
        InsightsAction::FilterPatterns(impact) => state.pattern_impact = impact,
        InsightsAction::StartTraining(id) => {
            state.training.entry(id).or_default().start();
        }
        InsightsAction::TickTraining { model_id, step } => {
            if let Some(run) = state.training.get_mut(&model_id) {
                run.tick(step);
            }
        }
    }
    state
}

impl InsightsState {
    #[must_use]
    pub fn run_for(&self, model_id: &str) -> Option<&TrainingRun> {
        self.training.get(model_id)
    }

    /// Ids of runs that still need a ticking task.
    #[must_use]
    pub fn running_ids(&self) -> Vec<String> {
        self.training
            .iter()
            .filter(|(_, run)| run.is_running())
            .map(|(id, _)| id.clone())
            .collect()
    }
}

/// Status and progress to display for `model`, with any local run applied.
#[must_use]
pub fn displayed_progress(model: &Model, run: Option<&TrainingRun>) -> (ModelStatus, Percent) {
    match run.and_then(|r| r.status_override().map(|status| (status, r.progress))) {
        Some(overlay) => overlay,
        None => (model.status, model.progress),
    }
}

#[must_use]
pub fn filter_patterns(patterns: &[Pattern], impact: Option<ImpactLevel>) -> Vec<&Pattern> {
    patterns
        .iter()
        .filter(|p| impact.is_none_or(|level| p.impact == level))
        .collect()
}

/// Group predictions by region, regions in order of first appearance.
#[must_use]
pub fn group_by_region(predictions: &[Prediction]) -> Vec<(&str, Vec<&Prediction>)> {
    let mut groups: Vec<(&str, Vec<&Prediction>)> = Vec::new();
    for p in predictions {
        match groups.iter_mut().find(|(region, _)| *region == p.region) {
            Some((_, members)) => members.push(p),
            None => groups.push((p.region.as_str(), vec![p])),
        }
    }
    groups
}

/// Mean accuracy across models, or `None` when empty.
#[must_use]
pub fn mean_accuracy(models: &[Model]) -> Option<Percent> {
    if models.is_empty() {
        return None;
    }
    let sum: u32 = models.iter().map(|m| u32::from(m.accuracy.value())).sum();
    let count = u32::try_from(models.len()).unwrap_or(u32::MAX);
    let mean = (sum + count / 2) / count;
    Some(Percent::clamped(i32::try_from(mean).unwrap_or(100)))
}
