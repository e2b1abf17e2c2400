use super::*;
use crate::state::progress::TrainingPhase;

fn model(id: &str, status: ModelStatus, progress: i32, accuracy: i32) -> Model {
    Model {
        id: id.to_owned(),
        title: format!("Model {id}"),
        description: String::new(),
        status,
        progress: Percent::clamped(progress),
        accuracy: Percent::clamped(accuracy),
    }
}

fn pattern(id: &str, impact: ImpactLevel) -> Pattern {
    Pattern {
        id: id.to_owned(),
        title: id.to_owned(),
        description: String::new(),
        confidence: Percent::clamped(80),
        impact,
        parameters: vec![],
    }
}

fn prediction(parameter: &str, region: &str) -> Prediction {
    Prediction {
        parameter: parameter.to_owned(),
        value: "1".to_owned(),
        confidence: Percent::clamped(70),
        timeframe: "7 days".to_owned(),
        region: region.to_owned(),
        methodology: String::new(),
    }
}

#[test]
fn defaults_to_models_tab_without_selection() {
    let s = InsightsState::default();
    assert_eq!(s.category, InsightCategory::Models);
    assert!(s.selected_model.is_none());
    assert!(!s.show_details);
    assert!(s.training.is_empty());
}

#[test]
fn open_and_close_model_details() {
    let s = reduce(InsightsState::default(), InsightsAction::OpenModel("m1".into()));
    assert_eq!(s.selected_model.as_deref(), Some("m1"));
    assert!(s.show_details);

    let s = reduce(s, InsightsAction::CloseDetails);
    assert!(!s.show_details);
    assert_eq!(s.selected_model.as_deref(), Some("m1"));
}

#[test]
fn switching_category_closes_details() {
    let s = reduce(InsightsState::default(), InsightsAction::OpenModel("m1".into()));
    let s = reduce(s, InsightsAction::SelectCategory(InsightCategory::Predictions));
    assert_eq!(s.category, InsightCategory::Predictions);
    assert!(!s.show_details);
}

#[test]
fn training_start_and_ticks_flow_through_reducer() {
    let mut s = reduce(InsightsState::default(), InsightsAction::StartTraining("m1".into()));
    assert_eq!(s.running_ids(), vec!["m1".to_owned()]);
    for _ in 0..25 {
        s = reduce(s, InsightsAction::TickTraining { model_id: "m1".into(), step: 5 });
    }
    let run = s.run_for("m1").unwrap();
    assert_eq!(run.progress, Percent::FULL);
    assert_eq!(run.phase, TrainingPhase::Active);
    assert!(s.running_ids().is_empty());
}

#[test]
fn tick_for_unknown_model_is_ignored() {
    let s = reduce(
        InsightsState::default(),
        InsightsAction::TickTraining { model_id: "ghost".into(), step: 3 },
    );
    assert!(s.training.is_empty());
}

#[test]
fn displayed_progress_prefers_local_run() {
    let m = model("m1", ModelStatus::Testing, 60, 90);
    assert_eq!(displayed_progress(&m, None), (ModelStatus::Testing, Percent::clamped(60)));

    let idle = TrainingRun::default();
    assert_eq!(displayed_progress(&m, Some(&idle)), (ModelStatus::Testing, Percent::clamped(60)));

    let mut run = TrainingRun::default();
    run.start();
    run.tick(4);
    assert_eq!(displayed_progress(&m, Some(&run)), (ModelStatus::Training, Percent::clamped(4)));
}

#[test]
fn filter_patterns_by_impact_keeps_order() {
    let ps = vec![
        pattern("a", ImpactLevel::High),
        pattern("b", ImpactLevel::Low),
        pattern("c", ImpactLevel::High),
    ];
    let high: Vec<&str> = filter_patterns(&ps, Some(ImpactLevel::High)).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(high, ["a", "c"]);
    assert_eq!(filter_patterns(&ps, None).len(), 3);
    assert!(filter_patterns(&ps, Some(ImpactLevel::Medium)).is_empty());
}

#[test]
fn group_by_region_preserves_first_appearance() {
    let ps = vec![
        prediction("SST", "Arabian Sea"),
        prediction("Salinity", "Bay of Bengal"),
        prediction("Chlorophyll", "Arabian Sea"),
    ];
    let groups = group_by_region(&ps);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "Arabian Sea");
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[1].0, "Bay of Bengal");
}

#[test]
fn mean_accuracy_rounds_and_handles_empty() {
    assert!(mean_accuracy(&[]).is_none());
    let ms = vec![model("a", ModelStatus::Active, 100, 90), model("b", ModelStatus::Active, 100, 85)];
    assert_eq!(mean_accuracy(&ms), Some(Percent::clamped(88)));
}
