use super::*;

#[test]
fn default_run_is_idle_at_zero() {
    let run = TrainingRun::default();
    assert_eq!(run.phase, TrainingPhase::Idle);
    assert_eq!(run.progress, Percent::ZERO);
    assert!(run.status_override().is_none());
}

#[test]
fn tick_while_idle_does_nothing() {
    let mut run = TrainingRun::default();
    assert!(!run.tick(5));
    assert_eq!(run.progress, Percent::ZERO);
}

#[test]
fn start_moves_to_training_and_is_idempotent() {
    let mut run = TrainingRun::default();
    assert!(run.start());
    run.tick(3);
    assert!(!run.start());
    assert_eq!(run.progress.value(), 3);
    assert_eq!(run.status_override(), Some(ModelStatus::Training));
}

#[test]
fn progress_never_exceeds_hundred_and_stops() {
    let mut run = TrainingRun::default();
    run.start();
    let mut ticks = 0;
    while run.tick(u8::MAX) {
        ticks += 1;
        assert!(run.progress.value() <= 100);
    }
    assert_eq!(ticks, 19);
    assert_eq!(run.progress, Percent::FULL);
    assert_eq!(run.phase, TrainingPhase::Active);

    assert!(!run.tick(5));
    assert_eq!(run.progress, Percent::FULL);
    assert_eq!(run.status_override(), Some(ModelStatus::Active));
}

#[test]
fn zero_step_still_advances_by_one() {
    let mut run = TrainingRun::default();
    run.start();
    run.tick(0);
    assert_eq!(run.progress.value(), 1);
}

#[test]
fn final_tick_caps_at_hundred() {
    let mut run = TrainingRun { phase: TrainingPhase::Training, progress: Percent::clamped(98) };
    assert!(!run.tick(4));
    assert_eq!(run.progress, Percent::FULL);
}

#[test]
fn completed_run_can_restart() {
    let mut run = TrainingRun { phase: TrainingPhase::Active, progress: Percent::FULL };
    assert!(run.start());
    assert_eq!(run.progress, Percent::ZERO);
    assert!(run.is_running());
}

#[test]
fn step_from_unit_covers_range() {
    assert_eq!(step_from_unit(0.0), 1);
    assert_eq!(step_from_unit(0.999), MAX_STEP);
    assert_eq!(step_from_unit(1.0), MAX_STEP);
    assert_eq!(step_from_unit(-3.0), 1);
    for i in 0..100 {
        let s = step_from_unit(f64::from(i) / 100.0);
        assert!((1..=MAX_STEP).contains(&s));
    }
}
