//! Farmer and worker landing page: latest plot values and recent anomalies.

use leptos::prelude::*;

use super::overview_feed::{PlotOverviewTable, RECENT_ANOMALY_LIMIT, use_overview_feed};
use crate::components::anomaly_card::AnomalyCard;
use crate::components::session_controls::SessionControls;
use crate::state::overview::recent_anomalies;

#[component]
pub fn FarmerDashboardPage() -> impl IntoView {
    let overview = use_overview_feed();

    view! {
        <div class="dashboard-page dashboard-page--farmer">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"My Plots"</span>
                <span class="toolbar__spacer"></span>
                <SessionControls/>
            </header>
            <Show when=move || overview.with(|o| o.error.is_some())>
                <p class="dashboard-page__error">{move || overview.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !overview.with(|o| o.loading)
                fallback=move || view! { <p>"Loading plots..."</p> }
            >
                {move || view! { <PlotOverviewTable plots=overview.with(|o| o.plots())/> }}
                <section class="dashboard-page__recent">
                    <h2>"Recent Anomalies"</h2>
                    {move || {
                        let recent = overview.with(|o| recent_anomalies(&o.anomalies, RECENT_ANOMALY_LIMIT));
                        if recent.is_empty() {
                            return view! { <p>"No anomalies detected on your plots"</p> }.into_any();
                        }
                        recent.into_iter().map(|a| view! { <AnomalyCard anomaly=a/> }).collect_view().into_any()
                    }}
                </section>
            </Show>
        </div>
    }
}
