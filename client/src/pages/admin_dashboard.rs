//! Admin landing page: fleet summary, per-plot table, recent anomalies.

use leptos::prelude::*;

use super::overview_feed::{PlotOverviewTable, RECENT_ANOMALY_LIMIT, use_overview_feed};
use crate::components::anomaly_card::AnomalyCard;
use crate::state::alerts::AlertStats;
use crate::state::overview::recent_anomalies;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let overview = use_overview_feed();
    let stats = Memo::new(move |_| overview.with(|o| AlertStats::from_anomalies(&o.anomalies)));

    view! {
        <div class="dashboard-page">
            <h1>"Farm Overview"</h1>
            <Show when=move || overview.with(|o| o.error.is_some())>
                <p class="dashboard-page__error">{move || overview.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !overview.with(|o| o.loading)
                fallback=move || view! { <p>"Loading dashboard..."</p> }
            >
                <section class="summary-cards">
                    <div class="summary-card">
                        <span class="summary-card__label">"Plots monitored"</span>
                        <span class="summary-card__value">{move || overview.with(|o| o.plots().len())}</span>
                    </div>
                    <div class="summary-card">
                        <span class="summary-card__label">"Readings"</span>
                        <span class="summary-card__value">{move || overview.with(|o| o.readings.len())}</span>
                    </div>
                    <div class="summary-card summary-card--critical">
                        <span class="summary-card__label">"Critical"</span>
                        <span class="summary-card__value">{move || stats.get().critical}</span>
                    </div>
                    <div class="summary-card summary-card--warning">
                        <span class="summary-card__label">"Warning"</span>
                        <span class="summary-card__value">{move || stats.get().warning}</span>
                    </div>
                    <div class="summary-card summary-card--low">
                        <span class="summary-card__label">"Low"</span>
                        <span class="summary-card__value">{move || stats.get().low}</span>
                    </div>
                </section>
                <section class="dashboard-page__plots">
                    <h2>"Plots"</h2>
                    {move || view! { <PlotOverviewTable plots=overview.with(|o| o.plots()) link_plots=true/> }}
                </section>
                <section class="dashboard-page__recent">
                    <h2>"Recent Anomalies"</h2>
                    {move || {
                        let recent = overview.with(|o| recent_anomalies(&o.anomalies, RECENT_ANOMALY_LIMIT));
                        if recent.is_empty() {
                            return view! { <p>"No anomalies detected in the system"</p> }.into_any();
                        }
                        recent
                            .into_iter()
                            .map(|a| view! { <AnomalyCard anomaly=a link_plot=true/> })
                            .collect_view()
                            .into_any()
                    }}
                </section>
            </Show>
        </div>
    }
}
