use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d001_overview::{DashboardController, DashboardState, HttpMetricSource};
use crate::shared::api_utils::api_base;
use crate::shared::charts::{MonthlyRevenueChart, RegionalRevenueChart};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::kpi_card::KpiCard;
use crate::shared::icons::{icon, IconKind};

type Controller = DashboardController<HttpMetricSource>;

/// Starts one batch unless a previous one is still loading
fn spawn_refresh(controller: Controller, state: RwSignal<DashboardState>) {
    let started = state.try_update(|s| s.begin_refresh()).unwrap_or(false);
    if !started {
        log::debug!("Refresh ignored: a fetch is already in flight");
        return;
    }

    spawn_local(async move {
        let result = controller.load().await;
        state.update(|s| s.apply(result));
    });
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let controller = StoredValue::new(DashboardController::new(HttpMetricSource::new(api_base())));
    let state = RwSignal::new(DashboardState::default());

    spawn_refresh(controller.get_value(), state);

    let on_refresh = move |_| spawn_refresh(controller.get_value(), state);

    let loading = Memo::new(move |_| state.with(|s| s.is_loading()));
    let has_data = Memo::new(move |_| state.with(|s| s.view_model.is_some()));

    let monthly = Signal::derive(move || {
        state.with(|s| {
            s.view_model
                .as_ref()
                .map(|vm| vm.monthly.clone())
                .unwrap_or_default()
        })
    });
    let regional = Signal::derive(move || {
        state.with(|s| {
            s.view_model
                .as_ref()
                .map(|vm| vm.regional.clone())
                .unwrap_or_default()
        })
    });

    let last_updated = move || {
        state.with(|s| s.refreshed_at()).map(|at| {
            view! {
                <span class="dashboard__updated">
                    "Last updated " {at.with_timezone(&Local).format("%H:%M:%S").to_string()}
                </span>
            }
        })
    };

    let banner = move || {
        state.with(|s| {
            let message = s.error_message()?.to_string();
            let text = if s.is_stale() {
                format!("Showing previous data. Refresh failed: {message}")
            } else {
                format!("Failed to load dashboard: {message}")
            };
            Some(view! { <div class="alert alert--error">{text}</div> })
        })
    };

    let cards = move || {
        state.with(|s| {
            s.view_model
                .as_ref()
                .map(|vm| vm.cards.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="page page--dashboard" id="d001_overview--dashboard">
            <div class="page__header">
                <h2 class="page__title">"Overview"</h2>
                <div class="page__actions">
                    {last_updated}
                    <button
                        class="button button--secondary"
                        disabled=move || loading.get()
                        on:click=on_refresh
                    >
                        {icon(IconKind::Refresh)}
                        {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                    </button>
                </div>
            </div>

            {banner}

            <Show
                when=move || has_data.get()
                fallback=move || {
                    loading.get().then(|| view! {
                        <div class="dashboard__loading">"Loading dashboard..."</div>
                    })
                }
            >
                <div class="kpi-grid">
                    {move || {
                        cards()
                            .into_iter()
                            .enumerate()
                            .map(|(index, card)| view! {
                                <CardAnimated delay_ms={index as u32 * 60}>
                                    <KpiCard card=card/>
                                </CardAnimated>
                            })
                            .collect_view()
                    }}
                </div>

                <div class="chart-grid">
                    <CardAnimated delay_ms=240 class="chart-panel">
                        <h3 class="panel__title">"Monthly Revenue"</h3>
                        <MonthlyRevenueChart data=monthly/>
                    </CardAnimated>
                    <CardAnimated delay_ms=300 class="chart-panel">
                        <h3 class="panel__title">"Revenue by Region"</h3>
                        <RegionalRevenueChart data=regional/>
                    </CardAnimated>
                </div>
            </Show>
        </div>
    }
}
