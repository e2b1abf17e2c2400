//! Simulated training progress for a single model.
//!
//! `Idle -> Training(0..=100) -> Active`. The timer that drives `tick` lives
//! in `hooks::use_training` and stops as soon as `tick` reports completion.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use records::{ModelStatus, Percent};

/// Largest progress increment applied by one tick.
pub const MAX_STEP: u8 = 5;

/// Delay between ticks.
pub const TICK_INTERVAL_MS: u64 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrainingPhase {
    #[default]
    Idle,
    Training,
    Active,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrainingRun {
    pub phase: TrainingPhase,
    pub progress: Percent,
}

impl TrainingRun {
    /// Begin (or restart after completion) at 0%. No-op while already training.
    pub fn start(&mut self) -> bool {
        if self.phase == TrainingPhase::Training {
            return false;
        }
        self.phase = TrainingPhase::Training;
        self.progress = Percent::ZERO;
        true
    }

    /// Advance by `step` (clamped to `1..=MAX_STEP`). Returns `true` while
    /// the run still needs ticks.
    pub fn tick(&mut self, step: u8) -> bool {
        if self.phase != TrainingPhase::Training {
            return false;
        }
        self.progress = self.progress.saturating_add(clamp_step(step));
        if self.progress.is_full() {
            self.phase = TrainingPhase::Active;
            return false;
        }
        true
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == TrainingPhase::Training
    }

    /// Status to display instead of the API-reported one, if any.
    #[must_use]
    pub fn status_override(&self) -> Option<ModelStatus> {
        match self.phase {
            TrainingPhase::Idle => None,
            TrainingPhase::Training => Some(ModelStatus::Training),
            TrainingPhase::Active => Some(ModelStatus::Active),
        }
    }
}

#[must_use]
pub fn clamp_step(step: u8) -> u8 {
    step.clamp(1, MAX_STEP)
}

/// Map a uniform sample in `[0, 1)` to a step in `1..=MAX_STEP`.
#[must_use]
pub fn step_from_unit(sample: f64) -> u8 {
    let scaled = (sample.clamp(0.0, 1.0) * f64::from(MAX_STEP)).floor();
    // `scaled` is within 0..=MAX_STEP.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    clamp_step(scaled as u8 + 1)
}
