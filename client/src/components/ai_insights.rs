//! AI Insights panel: models with simulated retraining, detected patterns,
//! and regional predictions.

use leptos::prelude::*;
use records::{ImpactLevel, Model, Pattern, Prediction};

use crate::components::fetch_status::FetchStatus;
use crate::hooks::use_fetch::{FetchHandle, use_fetch};
use crate::hooks::use_training::use_training;
use crate::net::api;
use crate::state::insights::{
    InsightCategory, InsightsAction, displayed_progress, filter_patterns, group_by_region, mean_accuracy,
};
use crate::state::nav::{Action, DashboardState};
use crate::util::format::{bar_width, impact_class, status_class};

fn dispatch(dashboard: RwSignal<DashboardState>, action: InsightsAction) {
    dashboard.update(|d| d.dispatch(Action::Insights(action)));
}

#[component]
pub fn AiInsightsPanel() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let models = use_fetch(api::fetch_models);
    let patterns = use_fetch(api::fetch_patterns);
    let predictions = use_fetch(api::fetch_predictions);
    let start_training = use_training(dashboard);

    let category = move || dashboard.with(|d| d.insights.category);

    view! {
        <section class="panel panel--insights">
            <header class="panel__header">
                <h2>"AI Insights"</h2>
                <div class="tabs">
                    {InsightCategory::ALL
                        .into_iter()
                        .map(|c| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || category() == c
                                    on:click=move |_| dispatch(dashboard, InsightsAction::SelectCategory(c))
                                >
                                    {c.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </header>
            {move || match category() {
                InsightCategory::Models => {
                    view! { <ModelList models=models on_train=start_training/> }.into_any()
                }
                InsightCategory::Patterns => view! { <PatternList patterns=patterns/> }.into_any(),
                InsightCategory::Predictions => {
                    view! { <PredictionList predictions=predictions/> }.into_any()
                }
            }}
            <ModelDetails models=models/>
        </section>
    }
}

#[component]
fn ModelList(models: FetchHandle<Vec<Model>>, on_train: Callback<String>) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    view! {
        <FetchStatus
            label="models"
            phase=models.phase()
            error=models.error()
            stale=models.is_stale()
            on_retry=models.refetch_callback()
        />
        <p class="panel__summary">
            {move || {
                models
                    .data()
                    .and_then(|list| mean_accuracy(&list))
                    .map(|acc| format!("Mean accuracy across models: {acc}"))
            }}
        </p>
        <div class="card-grid">
            {move || {
                let list = models.data().unwrap_or_default();
                let insights = dashboard.with(|d| d.insights.clone());
                list.into_iter()
                    .map(|model| {
                        let run = insights.run_for(&model.id).copied();
                        let (status, progress) = displayed_progress(&model, run.as_ref());
                        let training = run.is_some_and(|r| r.is_running());
                        let open_id = model.id.clone();
                        let train_id = model.id.clone();
                        view! {
                            <article class="card model-card">
                                <header class="card__header">
                                    <h3>{model.title.clone()}</h3>
                                    <span class=status_class(status)>{status.label()}</span>
                                </header>
                                <p class="card__body">{model.description.clone()}</p>
                                <div class="meter">
                                    <div class="meter__fill" style=bar_width(progress)></div>
                                </div>
                                <dl class="card__stats">
                                    <dt>"Progress"</dt>
                                    <dd>{progress.to_string()}</dd>
                                    <dt>"Accuracy"</dt>
                                    <dd>{model.accuracy.to_string()}</dd>
                                </dl>
                                <div class="card__actions">
                                    <button
                                        class="btn"
                                        on:click=move |_| dispatch(dashboard, InsightsAction::OpenModel(open_id.clone()))
                                    >
                                        "Details"
                                    </button>
                                    <button
                                        class="btn btn--primary"
                                        disabled=training
                                        on:click=move |_| on_train.run(train_id.clone())
                                    >
                                        {if training { "Training…" } else { "Retrain" }}
                                    </button>
                                </div>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn ModelDetails(models: FetchHandle<Vec<Model>>) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let selected = move || {
        let (show, id) = dashboard.with(|d| (d.insights.show_details, d.insights.selected_model.clone()));
        if !show {
            return None;
        }
        let id = id?;
        models.data()?.into_iter().find(|m| m.id == id)
    };
    let close = move |_| dispatch(dashboard, InsightsAction::CloseDetails);

    view! {
        {move || {
            selected()
                .map(|model| {
                    let run = dashboard.with(|d| d.insights.run_for(&model.id).copied());
                    let (status, progress) = displayed_progress(&model, run.as_ref());
                    view! {
                        <div class="dialog-backdrop" on:click=close>
                            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                <h2>{model.title.clone()}</h2>
                                <p>{model.description.clone()}</p>
                                <dl class="dialog__stats">
                                    <dt>"Status"</dt>
                                    <dd>{status.label()}</dd>
                                    <dt>"Progress"</dt>
                                    <dd>{progress.to_string()}</dd>
                                    <dt>"Accuracy"</dt>
                                    <dd>{model.accuracy.to_string()}</dd>
                                    <dt>"Identifier"</dt>
                                    <dd>{model.id.clone()}</dd>
                                </dl>
                                <div class="dialog__actions">
                                    <button class="btn" on:click=close>"Close"</button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn PatternList(patterns: FetchHandle<Vec<Pattern>>) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let impact = move || dashboard.with(|d| d.insights.pattern_impact);
    let set_impact = move |level: Option<ImpactLevel>| dispatch(dashboard, InsightsAction::FilterPatterns(level));

    view! {
        <FetchStatus
            label="patterns"
            phase=patterns.phase()
            error=patterns.error()
            stale=patterns.is_stale()
            on_retry=patterns.refetch_callback()
        />
        <div class="chips">
            <button class="chip" class:chip--active=move || impact().is_none() on:click=move |_| set_impact(None)>
                "All"
            </button>
            {ImpactLevel::ALL
                .into_iter()
                .map(|level| {
                    view! {
                        <button
                            class="chip"
                            class:chip--active=move || impact() == Some(level)
                            on:click=move |_| set_impact(Some(level))
                        >
                            {level.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
        <div class="card-grid">
            {move || {
                let list = patterns.data().unwrap_or_default();
                filter_patterns(&list, impact())
                    .into_iter()
                    .map(|p| {
                        view! {
                            <article class="card pattern-card">
                                <header class="card__header">
                                    <h3>{p.title.clone()}</h3>
                                    <span class=impact_class(p.impact)>{p.impact.label()}</span>
                                </header>
                                <p class="card__body">{p.description.clone()}</p>
                                <p class="card__meta">{format!("Confidence {}", p.confidence)}</p>
                                <ul class="tag-list">
                                    {p.parameters
                                        .iter()
                                        .map(|param| view! { <li class="tag">{param.clone()}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn PredictionList(predictions: FetchHandle<Vec<Prediction>>) -> impl IntoView {
    view! {
        <FetchStatus
            label="predictions"
            phase=predictions.phase()
            error=predictions.error()
            stale=predictions.is_stale()
            on_retry=predictions.refetch_callback()
        />
        {move || {
            let list = predictions.data().unwrap_or_default();
            group_by_region(&list)
                .into_iter()
                .map(|(region, members)| {
                    view! {
                        <section class="prediction-group">
                            <h3>{region.to_owned()}</h3>
                            <table class="prediction-table">
                                <thead>
                                    <tr>
                                        <th>"Parameter"</th>
                                        <th>"Forecast"</th>
                                        <th>"Timeframe"</th>
                                        <th>"Confidence"</th>
                                        <th>"Method"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {members
                                        .into_iter()
                                        .map(|p| {
                                            view! {
                                                <tr>
                                                    <td>{p.parameter.clone()}</td>
                                                    <td>{p.value.clone()}</td>
                                                    <td>{p.timeframe.clone()}</td>
                                                    <td>{p.confidence.to_string()}</td>
                                                    <td>{p.methodology.clone()}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        </section>
                    }
                })
                .collect::<Vec<_>>()
        }}
    }
}
