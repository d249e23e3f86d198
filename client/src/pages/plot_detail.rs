//! Admin plot detail page: metric stats, reading table, plot anomalies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routed at `/admin/plots/:plot_id`. Readings and anomalies are fetched
//! together every `POLL_INTERVAL` and again whenever the `plot_id` param
//! changes; results for a plot that is no longer shown are dropped.
//! Changing the time range re-filters the last fetch without a new request.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::anomaly_card::AnomalyCard;
use crate::net::api::ApiClient;
use crate::net::types::SensorKind;
use crate::state::plot::{PlotDetailState, TimeRange, series_rows};
use crate::util::format;
use crate::util::poll::{poll_every, spawn_once};

async fn refresh_plot(api: &ApiClient, plot: String, state: RwSignal<PlotDetailState>) {
    #[cfg(feature = "hydrate")]
    {
        let (readings, anomalies) = futures::join!(api.sensor_readings(Some(&plot)), api.anomalies());
        state.update(|s| match (readings, anomalies) {
            (Ok(readings), Ok(anomalies)) => s.apply(&plot, &readings, &anomalies, chrono::Utc::now()),
            (Err(e), _) | (_, Err(e)) => s.fail(&plot, format!("Failed to load plot {plot}: {e}")),
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, plot, state);
}

#[component]
fn MetricCard(kind: SensorKind, state: RwSignal<PlotDetailState>) -> impl IntoView {
    let stats = Memo::new(move |_| state.with(|s| s.stats(kind)));
    view! {
        <div class="metric-card">
            <h3 class="metric-card__title">{kind.label()}</h3>
            {move || match stats.get() {
                Some(st) => view! {
                    <p class="metric-card__current">{format::metric_value(Some(st.current), kind)}</p>
                    <dl class="metric-card__stats">
                        <dt>"Avg"</dt><dd>{format::metric_value(Some(st.avg), kind)}</dd>
                        <dt>"Min"</dt><dd>{format::metric_value(Some(st.min), kind)}</dd>
                        <dt>"Max"</dt><dd>{format::metric_value(Some(st.max), kind)}</dd>
                    </dl>
                }
                .into_any(),
                None => view! { <p class="metric-card__empty">"No data"</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn PlotDetailPage() -> impl IntoView {
    let params = use_params_map();
    let plot_id = move || params.read().get("plot_id").unwrap_or_default();
    let initial_plot = params.read_untracked().get("plot_id").unwrap_or_default();
    let state = RwSignal::new(PlotDetailState::for_plot(&initial_plot));
    let api = expect_context::<ApiClient>();

    // Reused for another plot id: clear the old data and fetch right away.
    let switch_api = api.clone();
    Effect::new(move || {
        let plot = plot_id();
        if state.try_update(|s| s.switch_plot(&plot)).unwrap_or(false) {
            let api = switch_api.clone();
            spawn_once(async move { refresh_plot(&api, plot, state).await });
        }
    });

    poll_every(move || {
        let api = api.clone();
        let plot = params.read_untracked().get("plot_id").unwrap_or_default();
        async move { refresh_plot(&api, plot, state).await }
    });

    view! {
        <div class="plot-page">
            <header class="plot-page__header">
                <h1>"Plot " {plot_id}</h1>
                <div class="plot-page__ranges">
                    {TimeRange::ALL
                        .into_iter()
                        .map(|range| {
                            view! {
                                <button
                                    class="btn plot-page__range"
                                    class:plot-page__range--active=move || state.with(|s| s.range == range)
                                    on:click=move |_| {
                                        let plot = plot_id();
                                        state.update(|s| s.set_range(range, &plot, chrono::Utc::now()));
                                    }
                                >
                                    {range.as_str()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </header>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="plot-page__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=move || view! { <p>"Loading plot data..."</p> }
            >
                <section class="metric-cards">
                    {SensorKind::ALL
                        .into_iter()
                        .map(|kind| view! { <MetricCard kind=kind state=state/> })
                        .collect_view()}
                </section>

                <section class="plot-page__series">
                    <h2>"Readings"</h2>
                    {move || {
                        let rows = state.with(|s| series_rows(&s.readings));
                        if rows.is_empty() {
                            return view! { <p>"No readings in this time range."</p> }.into_any();
                        }
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Time"</th>
                                        {SensorKind::ALL.into_iter().map(|k| view! { <th>{k.label()}</th> }).collect_view()}
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .into_iter()
                                        .map(|row| {
                                            view! {
                                                <tr>
                                                    <td>{format::timestamp(row.timestamp)}</td>
                                                    {SensorKind::ALL
                                                        .into_iter()
                                                        .zip(row.values)
                                                        .map(|(k, v)| view! { <td>{format::metric_value(v, k)}</td> })
                                                        .collect_view()}
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_any()
                    }}
                </section>

                <section class="plot-page__anomalies">
                    <h2>"Anomalies"</h2>
                    {move || {
                        let anomalies = state.with(|s| s.anomalies.clone());
                        if anomalies.is_empty() {
                            return view! { <p>"No anomalies recorded for this plot."</p> }.into_any();
                        }
                        anomalies.into_iter().map(|a| view! { <AnomalyCard anomaly=a/> }).collect_view().into_any()
                    }}
                </section>
            </Show>
        </div>
    }
}
