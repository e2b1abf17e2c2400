//! Timer tasks that drive simulated model training.
//!
//! Each running model gets one [`ProgressTask`]. The task is cancelled when
//! the run reaches 100%, when the same model is restarted, and when the
//! owning panel unmounts. Runs still in progress when the panel mounts again
//! get a fresh task, so progress resumes from where the shell's state left it.

#[cfg(test)]
#[path = "use_training_test.rs"]
mod use_training_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::state::insights::InsightsAction;
use crate::state::nav::{Action, DashboardState};

/// Cancellation flag shared between a timer loop and its owner.
#[derive(Clone, Debug, Default)]
pub struct ProgressTask {
    cancelled: Arc<AtomicBool>,
}

impl ProgressTask {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Live tasks keyed by model id.
#[derive(Clone, Debug, Default)]
pub struct TaskRegistry {
    tasks: Arc<Mutex<HashMap<String, ProgressTask>>>,
}

impl TaskRegistry {
    /// Register a new task for `model_id`, cancelling any previous one.
    pub fn replace(&self, model_id: &str) -> ProgressTask {
        let task = ProgressTask::default();
        if let Ok(mut tasks) = self.tasks.lock() {
            if let Some(previous) = tasks.insert(model_id.to_owned(), task.clone()) {
                previous.cancel();
            }
        }
        task
    }

    pub fn cancel_all(&self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            for (_, task) in tasks.drain() {
                task.cancel();
            }
        }
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.tasks
            .lock()
            .map(|tasks| tasks.values().filter(|t| !t.is_cancelled()).count())
            .unwrap_or(0)
    }
}

/// Returns a callback that starts training `model_id` and ticks it to 100%.
pub fn use_training(dashboard: RwSignal<DashboardState>) -> Callback<String> {
    let registry = TaskRegistry::default();

    let spawn = {
        let registry = registry.clone();
        move |model_id: String| {
            let task = registry.replace(&model_id);
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(drive(dashboard, model_id, task));
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (model_id, task);
            }
        }
    };

    for model_id in dashboard.get_untracked().insights.running_ids() {
        spawn(model_id);
    }

    let cleanup_registry = registry.clone();
    on_cleanup(move || cleanup_registry.cancel_all());

    Callback::new(move |model_id: String| {
        dashboard.update(|d| d.dispatch(Action::Insights(InsightsAction::StartTraining(model_id.clone()))));
        spawn(model_id);
    })
}

#[cfg(feature = "hydrate")]
async fn drive(dashboard: RwSignal<DashboardState>, model_id: String, task: ProgressTask) {
    use crate::state::progress::{TICK_INTERVAL_MS, TrainingRun, step_from_unit};

    loop {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TICK_INTERVAL_MS)).await;
        if task.is_cancelled() {
            break;
        }
        let step = step_from_unit(js_sys::Math::random());
        let still_running = dashboard.try_update(|d| {
            d.dispatch(Action::Insights(InsightsAction::TickTraining { model_id: model_id.clone(), step }));
            d.insights.run_for(&model_id).is_some_and(TrainingRun::is_running)
        });
        if still_running != Some(true) {
            log::debug!("training finished for {model_id}");
            task.cancel();
            break;
        }
    }
}
