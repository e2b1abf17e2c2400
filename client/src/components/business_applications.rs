//! Business Applications panel: sector-filtered insight cards.

use leptos::prelude::*;
use records::Sector;

use crate::components::fetch_status::FetchStatus;
use crate::hooks::use_fetch::use_fetch;
use crate::net::api;
use crate::state::business::{BusinessAction, high_impact_count, insights_for};
use crate::state::nav::{Action, DashboardState};
use crate::util::format::{bar_width, impact_class};

#[component]
pub fn BusinessApplicationsPanel() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let insights = use_fetch(api::fetch_business_insights);

    let sector = move || dashboard.with(|d| d.business.sector);
    let select = move |s: Option<Sector>| {
        dashboard.update(|d| d.dispatch(Action::Business(BusinessAction::SelectSector(s))));
    };

    view! {
        <section class="panel panel--business">
            <header class="panel__header">
                <h2>"Business Applications"</h2>
            </header>
            <FetchStatus
                label="business insights"
                phase=insights.phase()
                error=insights.error()
                stale=insights.is_stale()
                on_retry=insights.refetch_callback()
            />
            <div class="chips">
                <button class="chip" class:chip--active=move || sector().is_none() on:click=move |_| select(None)>
                    "All sectors"
                </button>
                {Sector::ALL
                    .into_iter()
                    .map(|s| {
                        view! {
                            <button
                                class="chip"
                                class:chip--active=move || sector() == Some(s)
                                on:click=move |_| select(Some(s))
                            >
                                {s.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {move || {
                let list = insights.data().unwrap_or_default();
                let shown = insights_for(&list, sector());
                let high = high_impact_count(&shown);
                let cards = shown
                    .iter()
                    .map(|insight| {
                        view! {
                            <article class="card insight-card">
                                <header class="card__header">
                                    <h3>{insight.title.clone()}</h3>
                                    <span class=impact_class(insight.impact)>{insight.impact.label()}</span>
                                </header>
                                <p class="card__meta">{insight.sector.label()}</p>
                                <p class="card__body">{insight.summary.clone()}</p>
                                <div class="meter">
                                    <div class="meter__fill" style=bar_width(insight.confidence)></div>
                                </div>
                                <p class="card__meta">{format!("Confidence {}", insight.confidence)}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <p class="panel__summary">
                        {format!("{} insights, {high} high impact", shown.len())}
                    </p>
                    <div class="card-grid">{cards}</div>
                }
            }}
        </section>
    }
}
