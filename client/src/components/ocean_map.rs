//! Ocean Map panel: slippy-map tiles with an SVG overlay of floats,
//! trajectories, and economic regions.
//!
//! DESIGN
//! ======
//! The map window is fixed to the northern Indian Ocean at one zoom level.
//! Tiles, markers, and circles share one Web-Mercator [`Viewport`], so the
//! overlay is plain absolutely-positioned SVG with no map library.

#[cfg(test)]
#[path = "ocean_map_test.rs"]
mod ocean_map_test;

use leptos::prelude::*;
use records::{BoundingBox, Float, FloatKind, ImpactLevel, LatLon, Region};

use crate::data::floats::FLOATS;
use crate::data::regions::REGIONS;
use crate::hooks::use_fetch::use_fetch;
use crate::net::api::{self, ClientConfig};
use crate::state::map::{Layer, MapAction, filter_floats, filter_regions, summarize_floats, total_economic_value};
use crate::state::nav::{Action, DashboardState};
use crate::util::format::{depth, impact_class, money_musd, salinity, temperature};
use crate::util::geo::{Viewport, tile_url, tiles_covering};

pub(crate) const MAP_ZOOM: u8 = 4;

pub(crate) const MAP_BOUNDS: BoundingBox = BoundingBox { south: -30.0, west: 50.0, north: 30.0, east: 105.0 };

const FLOAT_RADIUS_PX: f64 = 6.0;

/// SVG `points` attribute for a trajectory, oldest position first and the
/// current position last.
pub(crate) fn polyline_points(viewport: &Viewport, trajectory: &[LatLon], current: LatLon) -> String {
    trajectory
        .iter()
        .chain(std::iter::once(&current))
        .map(|p| {
            let px = viewport.to_screen(*p);
            format!("{:.1},{:.1}", px.x, px.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn float_class(kind: FloatKind) -> &'static str {
    match kind {
        FloatKind::Core => "float-marker float-marker--core",
        FloatKind::Bgc => "float-marker float-marker--bgc",
        FloatKind::Deep => "float-marker float-marker--deep",
    }
}

fn dispatch(dashboard: RwSignal<DashboardState>, action: MapAction) {
    dashboard.update(|d| d.dispatch(Action::Map(action)));
}

#[component]
pub fn OceanMapPanel() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let config = use_fetch(|| async { Ok::<ClientConfig, String>(api::fetch_config().await.unwrap_or_default()) });
    let viewport = Viewport::fit(&MAP_BOUNDS, MAP_ZOOM);

    let map = move || dashboard.with(|d| d.map.clone());
    let floats = move || {
        let filter = dashboard.with(|d| d.map.float_filter());
        filter_floats(FLOATS.as_slice(), &filter).into_iter().cloned().collect::<Vec<Float>>()
    };
    let regions = move || {
        let filter = dashboard.with(|d| d.map.region_filter());
        filter_regions(REGIONS.as_slice(), &filter).into_iter().cloned().collect::<Vec<Region>>()
    };
    let template = move || config.data().unwrap_or_default().tile_url;

    view! {
        <section class="panel panel--map">
            <header class="panel__header">
                <h2>"Ocean Map"</h2>
            </header>
            <MapControls/>
            <div class="map-layout">
                <div
                    class="map"
                    style=format!("width: {:.0}px; height: {:.0}px;", viewport.width, viewport.height)
                >
                    <div class="map__tiles">
                        {move || {
                            let template = template();
                            tiles_covering(&MAP_BOUNDS, MAP_ZOOM)
                                .into_iter()
                                .map(|tile| {
                                    let at = viewport.tile_offset(tile);
                                    view! {
                                        <img
                                            class="map__tile"
                                            src=tile_url(&template, tile)
                                            alt=""
                                            style=format!("left: {:.0}px; top: {:.0}px;", at.x, at.y)
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <svg
                        class="map__overlay"
                        width=viewport.width
                        height=viewport.height
                        on:click=move |_| dispatch(dashboard, MapAction::SelectFloat(None))
                    >
                        {move || {
                            if !map().show_regions {
                                return Vec::new();
                            }
                            regions()
                                .into_iter()
                                .map(|region| {
                                    let c = viewport.to_screen(region.center);
                                    let r = viewport.km_to_px(region.radius_km, region.center.lat);
                                    view! {
                                        <circle
                                            class=format!("region {}", impact_class(region.impact))
                                            cx=c.x
                                            cy=c.y
                                            r=r
                                        >
                                            <title>{region.name.clone()}</title>
                                        </circle>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        {move || {
                            if !map().show_trajectories {
                                return Vec::new();
                            }
                            floats()
                                .into_iter()
                                .map(|f| {
                                    view! {
                                        <polyline
                                            class="trajectory"
                                            points=polyline_points(&viewport, &f.trajectory, f.position)
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        {move || {
                            let state = map();
                            if !state.show_floats {
                                return Vec::new();
                            }
                            floats()
                                .into_iter()
                                .map(|f| {
                                    let at = viewport.to_screen(f.position);
                                    let selected = state.selected_float.as_deref() == Some(f.id.as_str());
                                    let id = f.id.clone();
                                    view! {
                                        <circle
                                            class=float_class(f.kind)
                                            class:float-marker--selected=selected
                                            cx=at.x
                                            cy=at.y
                                            r=FLOAT_RADIUS_PX
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                dispatch(dashboard, MapAction::SelectFloat(Some(id.clone())));
                                            }
                                        >
                                            <title>{format!("Float {}", f.id)}</title>
                                        </circle>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </svg>
                </div>
                <aside class="map-sidebar">
                    <SelectedFloatCard/>
                    <div class="card">
                        <h3>"Floats in view"</h3>
                        {move || {
                            let shown = floats();
                            let refs: Vec<&Float> = shown.iter().collect();
                            let summary = summarize_floats(&refs);
                            let mean = summary.mean_temperature_c.map_or_else(|| "n/a".to_owned(), temperature);
                            view! {
                                <p>{format!("{} floats, mean surface temperature {mean}", summary.total)}</p>
                                <ul class="kind-counts">
                                    {summary
                                        .by_kind
                                        .into_iter()
                                        .map(|(kind, n)| view! { <li>{format!("{}: {n}", kind.label())}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        }}
                    </div>
                    <div class="card">
                        <h3>"Regions in view"</h3>
                        {move || {
                            let shown = regions();
                            let refs: Vec<&Region> = shown.iter().collect();
                            view! {
                                <p>{format!("Combined economic value {}", money_musd(total_economic_value(&refs)))}</p>
                                <ul class="region-list">
                                    {shown
                                        .iter()
                                        .map(|r| {
                                            view! {
                                                <li>
                                                    <span>{r.name.clone()}</span>
                                                    <span class=impact_class(r.impact)>{r.impact.label()}</span>
                                                    <span>{money_musd(r.economic_value_musd)}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        }}
                    </div>
                </aside>
            </div>
        </section>
    }
}

#[component]
fn MapControls() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let map = move || dashboard.with(|d| d.map.clone());

    let layer_toggle = move |layer: Layer, label: &'static str| {
        let checked = move || {
            let m = map();
            match layer {
                Layer::Floats => m.show_floats,
                Layer::Trajectories => m.show_trajectories,
                Layer::Regions => m.show_regions,
            }
        };
        view! {
            <label class="toggle">
                <input
                    type="checkbox"
                    prop:checked=checked
                    on:change=move |_| dispatch(dashboard, MapAction::ToggleLayer(layer))
                />
                {label}
            </label>
        }
    };

    view! {
        <div class="map-controls">
            <fieldset class="map-controls__group">
                <legend>"Layers"</legend>
                {layer_toggle(Layer::Floats, "Floats")}
                {layer_toggle(Layer::Trajectories, "Trajectories")}
                {layer_toggle(Layer::Regions, "Regions")}
            </fieldset>
            <fieldset class="map-controls__group">
                <legend>"Float type"</legend>
                <button
                    class="chip"
                    class:chip--active=move || map().float_kind.is_none()
                    on:click=move |_| dispatch(dashboard, MapAction::FilterFloatKind(None))
                >
                    "All"
                </button>
                {FloatKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                class="chip"
                                class:chip--active=move || map().float_kind == Some(kind)
                                on:click=move |_| dispatch(dashboard, MapAction::FilterFloatKind(Some(kind)))
                            >
                                {kind.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>
            <fieldset class="map-controls__group">
                <legend>"Region impact"</legend>
                <button
                    class="chip"
                    class:chip--active=move || map().region_impact.is_none()
                    on:click=move |_| dispatch(dashboard, MapAction::FilterRegionImpact(None))
                >
                    "All"
                </button>
                {ImpactLevel::ALL
                    .into_iter()
                    .map(|level| {
                        view! {
                            <button
                                class="chip"
                                class:chip--active=move || map().region_impact == Some(level)
                                on:click=move |_| dispatch(dashboard, MapAction::FilterRegionImpact(Some(level)))
                            >
                                {level.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || map().fishing_only
                        on:change=move |_| dispatch(dashboard, MapAction::ToggleFishingOnly)
                    />
                    "Fishing zones only"
                </label>
            </fieldset>
        </div>
    }
}

#[component]
fn SelectedFloatCard() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let selected = move || {
        let id = dashboard.with(|d| d.map.selected_float.clone())?;
        FLOATS.iter().find(|f| f.id == id).cloned()
    };

    view! {
        {move || {
            selected()
                .map(|f| {
                    view! {
                        <div class="card float-card">
                            <header class="card__header">
                                <h3>{format!("Float {}", f.id)}</h3>
                                <button
                                    class="btn btn--small"
                                    on:click=move |_| dispatch(dashboard, MapAction::SelectFloat(None))
                                >
                                    "Close"
                                </button>
                            </header>
                            <dl class="card__stats">
                                <dt>"Type"</dt>
                                <dd>{f.kind.label()}</dd>
                                <dt>"Position"</dt>
                                <dd>{format!("{:.2}, {:.2}", f.position.lat, f.position.lon)}</dd>
                                <dt>"Temperature"</dt>
                                <dd>{temperature(f.readings.temperature_c)}</dd>
                                <dt>"Salinity"</dt>
                                <dd>{salinity(f.readings.salinity_psu)}</dd>
                                <dt>"Profile depth"</dt>
                                <dd>{depth(f.readings.depth_m)}</dd>
                                <dt>"Surfacings"</dt>
                                <dd>{f.trajectory.len().to_string()}</dd>
                            </dl>
                        </div>
                    }
                })
        }}
    }
}
