//! One anomaly with its AI recommendation and a collapsible explanation.

use leptos::prelude::*;

use super::status_badge::StatusBadge;
use crate::app::plot_path;
use crate::net::types::AnomalyRecord;
use crate::util::format;

#[component]
pub fn AnomalyCard(
    anomaly: AnomalyRecord,
    /// Render the plot name as a link to its detail page.
    #[prop(optional)]
    link_plot: bool,
) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let plot = anomaly.plot_key().map(str::to_owned);
    let plot_view = plot.map(|plot| {
        if link_plot {
            view! { <a class="anomaly-card__plot" href=plot_path(&plot)>"Plot " {plot.clone()}</a> }.into_any()
        } else {
            view! { <span class="anomaly-card__plot">"Plot " {plot}</span> }.into_any()
        }
    });
    let explanation = anomaly.agent_explanation.clone().filter(|e| !e.is_empty());
    let has_explanation = explanation.is_some();

    view! {
        <article class="anomaly-card">
            <header class="anomaly-card__header">
                <h3 class="anomaly-card__title">{anomaly.title().to_owned()}</h3>
                <StatusBadge status=anomaly.severity.clone()/>
            </header>
            <p class="anomaly-card__meta">
                {plot_view}
                <span class="anomaly-card__time">{format::timestamp(anomaly.timestamp)}</span>
                <span class="anomaly-card__confidence">
                    "Confidence: " {format::confidence(anomaly.model_confidence)}
                </span>
            </p>
            {anomaly.description.clone().map(|d| view! { <p class="anomaly-card__description">{d}</p> })}
            {anomaly
                .agent_recommendation
                .clone()
                .map(|r| {
                    view! {
                        <div class="anomaly-card__recommendation">
                            <strong>"AI Recommendation: "</strong>
                            {r}
                        </div>
                    }
                })}
            <Show when=move || has_explanation>
                <button class="btn anomaly-card__toggle" on:click=move |_| expanded.update(|e| *e = !*e)>
                    {move || if expanded.get() { "Hide explanation" } else { "Show explanation" }}
                </button>
            </Show>
            <Show when=move || expanded.get()>
                <p class="anomaly-card__explanation">{explanation.clone().unwrap_or_default()}</p>
            </Show>
        </article>
    }
}
