//! View shell: navigation bar plus exactly one panel.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::ai_insights::AiInsightsPanel;
use crate::components::business_applications::BusinessApplicationsPanel;
use crate::components::disaster_warning::DisasterWarningPanel;
use crate::components::education_hub::EducationHubPanel;
use crate::components::nav_bar::NavBar;
use crate::components::ocean_map::OceanMapPanel;
use crate::state::nav::{Action, DashboardState, View};
use crate::util::location;

/// Views the shell renders for `state`. Always exactly one.
pub(crate) fn mounted_views(state: &DashboardState) -> Vec<View> {
    View::ALL.into_iter().filter(|v| state.is_visible(*v)).collect()
}

fn render_panel(view: View) -> AnyView {
    match view {
        View::AiInsights => view! { <AiInsightsPanel/> }.into_any(),
        View::OceanMap => view! { <OceanMapPanel/> }.into_any(),
        View::DisasterWarning => view! { <DisasterWarningPanel/> }.into_any(),
        View::BusinessApplications => view! { <BusinessApplicationsPanel/> }.into_any(),
        View::EducationHub => view! { <EducationHubPanel/> }.into_any(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    // Effects only run after hydration, so SSR always renders the default view.
    Effect::new(move || {
        if let Some(view) = location::read_view() {
            dashboard.update(|d| d.dispatch(Action::SelectView(view)));
        }
    });

    // Panel-local actions change `dashboard` too; only a view change may remount.
    let mounted = Memo::new(move |_| dashboard.with(mounted_views));

    view! {
        <div class="dashboard">
            <NavBar/>
            <main class="dashboard__main">
                {move || mounted.get().into_iter().map(render_panel).collect::<Vec<_>>()}
            </main>
        </div>
    }
}
