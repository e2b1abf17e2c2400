//! Education Hub panel: lesson tracks with local completion tracking.

use leptos::prelude::*;

use crate::data::lessons::{LESSONS, Lesson};
use crate::state::education::{EducationAction, Track};
use crate::state::nav::{Action, DashboardState};
use crate::util::format::bar_width;

#[component]
pub fn EducationHubPanel() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let dispatch = move |action: EducationAction| dashboard.update(|d| d.dispatch(Action::Education(action)));
    let track = move || dashboard.with(|d| d.education.track);
    let progress = move || dashboard.with(|d| d.education.track_progress(LESSONS));

    let open_lesson = move || {
        let id = dashboard.with(|d| d.education.open_lesson)?;
        LESSONS.iter().find(|l| l.id == id).copied()
    };

    view! {
        <section class="panel panel--education">
            <header class="panel__header">
                <h2>"Education Hub"</h2>
                <div class="tabs">
                    {Track::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || track() == t
                                    on:click=move |_| dispatch(EducationAction::SelectTrack(t))
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </header>
            <div class="track-progress">
                <div class="meter">
                    <div class="meter__fill" style=move || bar_width(progress())></div>
                </div>
                <span>{move || format!("{} complete", progress())}</span>
                <button class="btn btn--ghost" on:click=move |_| dispatch(EducationAction::ResetProgress)>
                    "Reset"
                </button>
            </div>
            <ul class="lesson-list">
                {move || {
                    let current = track();
                    LESSONS
                        .iter()
                        .filter(|l| l.track == current)
                        .map(|lesson| {
                            let id = lesson.id;
                            let done = move || dashboard.with(|d| d.education.is_completed(id));
                            view! {
                                <li class="lesson" class:lesson--done=done>
                                    <button class="lesson__open" on:click=move |_| dispatch(EducationAction::OpenLesson(id))>
                                        <span class="lesson__title">{lesson.title}</span>
                                        <span class="lesson__minutes">{format!("{} min", lesson.minutes)}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            {move || open_lesson().map(|lesson| view! { <LessonDialog lesson=lesson/> })}
        </section>
    }
}

#[component]
fn LessonDialog(lesson: Lesson) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let dispatch = move |action: EducationAction| dashboard.update(|d| d.dispatch(Action::Education(action)));
    let id = lesson.id;
    let done = move || dashboard.with(|d| d.education.is_completed(id));

    view! {
        <div class="dialog-backdrop" on:click=move |_| dispatch(EducationAction::CloseLesson)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <p class="dialog__eyebrow">{lesson.track.label()}</p>
                <h2>{lesson.title}</h2>
                <p>{lesson.summary}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| dispatch(EducationAction::CloseLesson)>
                        "Close"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=done
                        on:click=move |_| dispatch(EducationAction::CompleteLesson(id))
                    >
                        {move || if done() { "Completed" } else { "Mark complete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
