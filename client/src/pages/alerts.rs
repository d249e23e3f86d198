//! Admin alerts page: filterable, sortable anomaly list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anomalies refresh every `POLL_INTERVAL` and on demand. Filter and sort
//! apply client-side; stats always count the unfiltered list.

use leptos::prelude::*;

use crate::components::anomaly_card::AnomalyCard;
use crate::net::api::ApiClient;
use crate::state::alerts::{AlertsState, SeverityFilter, SortOrder};
use crate::util::poll::{poll_every, spawn_once};

async fn refresh_alerts(api: &ApiClient, state: RwSignal<AlertsState>) {
    state.update(|s| s.loading = true);
    let result = api.anomalies().await;
    state.update(|s| {
        s.loading = false;
        match result {
            Ok(items) => {
                s.items = items;
                s.error = None;
            }
            Err(e) => s.error = Some(format!("Failed to load alerts: {e}")),
        }
    });
}

#[component]
pub fn AlertsPage() -> impl IntoView {
    let state = RwSignal::new(AlertsState { loading: true, ..AlertsState::default() });
    let api = expect_context::<ApiClient>();

    let poll_api = api.clone();
    poll_every(move || {
        let api = poll_api.clone();
        async move { refresh_alerts(&api, state).await }
    });

    let on_refresh = move |_| {
        let api = api.clone();
        spawn_once(async move { refresh_alerts(&api, state).await });
    };

    let stats = Memo::new(move |_| state.with(AlertsState::stats));

    view! {
        <div class="alerts-page">
            <header class="alerts-page__header">
                <h1>"Alerts"</h1>
                <button class="btn alerts-page__refresh" on:click=on_refresh disabled=move || state.with(|s| s.loading)>
                    {move || if state.with(|s| s.loading) { "Refreshing..." } else { "Refresh" }}
                </button>
            </header>

            <section class="summary-cards">
                <div class="summary-card">
                    <span class="summary-card__label">"Total"</span>
                    <span class="summary-card__value">{move || stats.get().total}</span>
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

            <div class="alerts-page__controls">
                <div class="alerts-page__filters">
                    {SeverityFilter::ALL
                        .into_iter()
                        .map(|filter| {
                            view! {
                                <button
                                    class="btn alerts-page__filter"
                                    class:alerts-page__filter--active=move || state.with(|s| s.filter == filter)
                                    on:click=move |_| state.update(|s| s.filter = filter)
                                >
                                    {filter.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <select
                    class="alerts-page__sort"
                    prop:value=move || state.with(|s| s.sort.as_str())
                    on:change=move |ev| state.update(|s| s.sort = SortOrder::parse(&event_target_value(&ev)))
                >
                    {SortOrder::ALL
                        .into_iter()
                        .map(|order| view! { <option value=order.as_str()>{order.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="alerts-page__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>

            <div class="alerts-page__list">
                {move || {
                    let visible = state.with(AlertsState::visible);
                    if visible.is_empty() {
                        let message = state.with(AlertsState::empty_message);
                        return view! { <p class="alerts-page__empty">{message}</p> }.into_any();
                    }
                    visible
                        .into_iter()
                        .map(|a| view! { <AnomalyCard anomaly=a link_plot=true/> })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <p class="alerts-page__summary">{move || state.with(AlertsState::results_summary)}</p>
        </div>
    }
}
