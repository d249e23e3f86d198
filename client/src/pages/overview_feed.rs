//! Data feed and plot table shared by the admin and farmer dashboards.

use leptos::prelude::*;

use crate::app::plot_path;
use crate::components::status_badge::StatusBadge;
use crate::net::api::ApiClient;
use crate::net::types::SensorKind;
use crate::state::overview::{OverviewState, PlotSummary};
use crate::util::format;
use crate::util::poll::poll_every;

/// How many anomalies the dashboards list.
pub const RECENT_ANOMALY_LIMIT: usize = 5;

/// Create the overview signal and keep it refreshed while the page is mounted.
pub fn use_overview_feed() -> RwSignal<OverviewState> {
    let state = RwSignal::new(OverviewState { loading: true, ..OverviewState::default() });
    let api = expect_context::<ApiClient>();
    poll_every(move || {
        let api = api.clone();
        async move { refresh_overview(&api, state).await }
    });
    state
}

async fn refresh_overview(api: &ApiClient, state: RwSignal<OverviewState>) {
    #[cfg(feature = "hydrate")]
    {
        let (readings, anomalies) = futures::join!(api.sensor_readings(None), api.anomalies());
        state.update(|s| {
            s.loading = false;
            match (readings, anomalies) {
                (Ok(readings), Ok(anomalies)) => {
                    s.readings = readings;
                    s.anomalies = anomalies;
                    s.error = None;
                }
                (Err(e), _) | (_, Err(e)) => s.error = Some(format!("Failed to load dashboard data: {e}")),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, state);
}

/// Per-plot table of latest values. Plot names link to detail pages when
/// `link_plots` is set.
#[component]
pub fn PlotOverviewTable(plots: Vec<PlotSummary>, #[prop(optional)] link_plots: bool) -> impl IntoView {
    if plots.is_empty() {
        return view! { <p class="dashboard-page__empty">"No sensor readings yet."</p> }.into_any();
    }
    view! {
        <table class="data-table plot-table">
            <thead>
                <tr>
                    <th>"Plot"</th>
                    {SensorKind::ALL.into_iter().map(|k| view! { <th>{k.label()}</th> }).collect_view()}
                    <th>"Last reading"</th>
                    <th>"Anomalies"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {plots
                    .into_iter()
                    .map(|p| {
                        let name = if link_plots {
                            view! { <a href=plot_path(&p.plot)>{p.plot.clone()}</a> }.into_any()
                        } else {
                            view! { <span>{p.plot.clone()}</span> }.into_any()
                        };
                        let status = p.worst.map_or("normal", |w| w.as_str());
                        view! {
                            <tr>
                                <td>{name}</td>
                                {SensorKind::ALL
                                    .into_iter()
                                    .map(|k| view! { <td>{format::metric_value(p.latest(k), k)}</td> })
                                    .collect_view()}
                                <td>{p.last_seen.map_or_else(|| format::MISSING.to_owned(), format::timestamp)}</td>
                                <td>{p.anomalies}</td>
                                <td><StatusBadge status=Some(status.to_owned())/></td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
