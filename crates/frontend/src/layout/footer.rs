use contracts::dashboards::d001_overview::HealthResponse;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::api_url;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online { records: usize },
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> String {
        match self {
            ServerStatus::Online { records } => format!("Server: Online ({records} records)"),
            ServerStatus::Offline => "Server: Offline".to_string(),
            ServerStatus::Checking => "Server: Checking...".to_string(),
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online { .. } => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    spawn_local(async move {
        let next = match ping_server().await {
            Some(health) => ServerStatus::Online {
                records: health.records,
            },
            None => ServerStatus::Offline,
        };
        status.set(next);
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class=move || status.get().css_class()>
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}

async fn ping_server() -> Option<HealthResponse> {
    let response = match Request::get(&api_url("/api/health")).send().await {
        Ok(r) if r.ok() => r,
        Ok(r) => {
            log::warn!("Health check returned HTTP {}", r.status());
            return None;
        }
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            return None;
        }
    };

    response.json::<HealthResponse>().await.ok()
}
