//! Inline loading/error strip with a retry button.

#[cfg(test)]
#[path = "fetch_status_test.rs"]
mod fetch_status_test;

use leptos::prelude::*;

use crate::state::fetch::FetchPhase;

/// Status strip for one fetched resource. Renders nothing once data is ready.
#[component]
pub fn FetchStatus(
    label: &'static str,
    phase: Signal<FetchPhase>,
    error: Signal<Option<String>>,
    stale: Signal<bool>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        {move || {
            let line = status_line(label, phase.get(), stale.get())?;
            let failed = phase.get() == FetchPhase::Failed;
            Some(view! {
                <div class="fetch-status" class:fetch-status--error=failed>
                    <span class="fetch-status__text">{line}</span>
                    <Show when=move || failed>
                        <span class="fetch-status__detail">{move || error.get().unwrap_or_default()}</span>
                        <button class="btn btn--small" on:click=move |_| on_retry.run(())>
                            "Retry"
                        </button>
                    </Show>
                </div>
            })
        }}
    }
}

/// Headline for the strip, or `None` when nothing needs saying.
pub(crate) fn status_line(label: &str, phase: FetchPhase, stale: bool) -> Option<String> {
    match phase {
        FetchPhase::Idle | FetchPhase::Ready => None,
        FetchPhase::Loading => Some(format!("Loading {label}…")),
        FetchPhase::Failed if stale => Some(format!("Could not refresh {label}; showing last loaded data.")),
        FetchPhase::Failed => Some(format!("Could not load {label}.")),
    }
}
