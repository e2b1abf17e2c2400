//! Top navigation: one entry per dashboard view.

use leptos::prelude::*;

use crate::state::nav::{Action, DashboardState, View};
use crate::util::location;

#[component]
pub fn NavBar() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let select = move |view: View| {
        dashboard.update(|d| d.dispatch(Action::SelectView(view)));
        location::write_view(view);
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"OceanView"</span>
            <ul class="nav-bar__items">
                {View::ALL
                    .into_iter()
                    .map(|view| {
                        view! {
                            <li>
                                <button
                                    class="nav-bar__item"
                                    class:nav-bar__item--active=move || dashboard.with(|d| d.is_visible(view))
                                    on:click=move |_| select(view)
                                >
                                    {view.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
