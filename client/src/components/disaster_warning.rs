//! Disaster Warning panel: active alerts, most urgent first.

use leptos::prelude::*;
use records::Severity;

use crate::components::fetch_status::FetchStatus;
use crate::hooks::use_fetch::use_fetch;
use crate::net::api;
use crate::state::alerts::{AlertsAction, count_by_severity, visible_alerts};
use crate::state::nav::{Action, DashboardState};
use crate::util::format::{bar_width, severity_class};

#[component]
pub fn DisasterWarningPanel() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let alerts = use_fetch(api::fetch_alerts);

    let dispatch = move |action: AlertsAction| dashboard.update(|d| d.dispatch(Action::Alerts(action)));
    let filter = move || dashboard.with(|d| d.alerts.severity_filter);
    let selected = move || dashboard.with(|d| d.alerts.selected_alert.clone());

    view! {
        <section class="panel panel--alerts">
            <header class="panel__header">
                <h2>"Disaster Warning"</h2>
            </header>
            <FetchStatus
                label="alerts"
                phase=alerts.phase()
                error=alerts.error()
                stale=alerts.is_stale()
                on_retry=alerts.refetch_callback()
            />
            <div class="chips">
                <button
                    class="chip"
                    class:chip--active=move || filter().is_none()
                    on:click=move |_| dispatch(AlertsAction::FilterSeverity(None))
                >
                    "All"
                </button>
                {move || {
                    let counts = alerts.data().map(|list| count_by_severity(&list)).unwrap_or_default();
                    Severity::ALL
                        .into_iter()
                        .map(|severity| {
                            let count = counts
                                .iter()
                                .find(|(s, _)| *s == severity)
                                .map_or(0, |(_, n)| *n);
                            view! {
                                <button
                                    class=format!("chip {}", severity_class(severity))
                                    class:chip--active=move || filter() == Some(severity)
                                    on:click=move |_| dispatch(AlertsAction::FilterSeverity(Some(severity)))
                                >
                                    {format!("{} ({count})", severity.label())}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="alert-list">
                {move || {
                    let list = alerts.data().unwrap_or_default();
                    let open = selected();
                    let shown = visible_alerts(&list, filter());
                    if shown.is_empty() && !list.is_empty() {
                        return view! { <p class="panel__empty">"No alerts at this severity."</p> }.into_any();
                    }
                    shown
                        .into_iter()
                        .map(|alert| {
                            let expanded = open.as_deref() == Some(alert.id.as_str());
                            let id = alert.id.clone();
                            view! {
                                <article
                                    class=format!("card alert-card {}", severity_class(alert.severity))
                                    class:alert-card--open=expanded
                                    on:click=move |_| dispatch(AlertsAction::Select(id.clone()))
                                >
                                    <header class="card__header">
                                        <h3>{alert.disaster_type.label()}</h3>
                                        <span class="badge">{alert.severity.label()}</span>
                                    </header>
                                    <div class="meter">
                                        <div class="meter__fill" style=bar_width(alert.probability)></div>
                                    </div>
                                    <p class="card__meta">
                                        {format!("Probability {}", alert.probability)}
                                    </p>
                                    <p class="card__body">{alert.affected_areas.join(", ")}</p>
                                    {expanded
                                        .then(|| {
                                            let steps = alert.recommended_actions.clone();
                                            view! {
                                                <ul class="action-list">
                                                    {steps
                                                        .into_iter()
                                                        .map(|step| view! { <li>{step}</li> })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            }
                                        })}
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </section>
    }
}
