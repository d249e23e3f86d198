//! Admin ML metrics page: detector scores and anomalies over time.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::metrics::{MetricsState, bar_width, curve_peak, metric_bars, share};
use crate::util::format;
use crate::util::poll::poll_every;

async fn refresh_metrics(api: &ApiClient, state: RwSignal<MetricsState>) {
    #[cfg(feature = "hydrate")]
    {
        let (metrics, curve) = futures::join!(api.ml_metrics(), api.anomaly_curve());
        state.update(|s| {
            s.loading = false;
            match metrics {
                Ok(m) => {
                    s.metrics = Some(m);
                    s.error = None;
                }
                Err(e) => s.error = Some(format!("Failed to load ML metrics: {e}")),
            }
            match curve {
                Ok(points) => s.curve = points,
                Err(e) => log::warn!("anomaly curve unavailable: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, state);
}

#[component]
pub fn MlMetricsPage() -> impl IntoView {
    let state = RwSignal::new(MetricsState { loading: true, ..MetricsState::default() });
    let api = expect_context::<ApiClient>();

    poll_every(move || {
        let api = api.clone();
        async move { refresh_metrics(&api, state).await }
    });

    view! {
        <div class="ml-page">
            <h1>"ML Model Metrics"</h1>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="ml-page__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=move || view! { <p>"Loading metrics..."</p> }
            >
                <section class="ml-page__bars">
                    <h2>"Detector performance"</h2>
                    {move || {
                        let bars = state.with(|s| s.metrics.as_ref().map(metric_bars).unwrap_or_default());
                        bars.into_iter()
                            .map(|bar| {
                                view! {
                                    <div class="bar-row">
                                        <span class="bar-row__label">{bar.name}</span>
                                        <span class="bar-row__track">
                                            <span class="bar-row__fill" style:width=bar_width(bar.percent)></span>
                                        </span>
                                        <span class="bar-row__value">{format::percent(bar.percent)}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </section>
                <section class="ml-page__curve">
                    <h2>"Anomalies over time"</h2>
                    {move || {
                        let curve = state.with(|s| s.curve.clone());
                        if curve.is_empty() {
                            return view! { <p>"No anomaly history yet."</p> }.into_any();
                        }
                        let peak = curve_peak(&curve);
                        curve
                            .into_iter()
                            .map(|point| {
                                view! {
                                    <div class="bar-row">
                                        <span class="bar-row__label">{point.time}</span>
                                        <span class="bar-row__track">
                                            <span class="bar-row__fill" style:width=bar_width(share(point.count, peak))></span>
                                        </span>
                                        <span class="bar-row__value">{point.count}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </section>
            </Show>
        </div>
    }
}
