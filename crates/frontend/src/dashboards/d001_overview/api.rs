use async_trait::async_trait;
use contracts::dashboards::d001_overview::{KpiSnapshot, MonthlyRevenuePoint, RegionalRevenuePoint};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::source::{FetchError, MetricSource};
use crate::shared::api_utils::join_url;

/// [`MetricSource`] over the backend HTTP API
#[derive(Debug, Clone)]
pub struct HttpMetricSource {
    base_url: String,
}

impl HttpMetricSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = join_url(&self.base_url, path);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        if !response.ok() {
            return Err(FetchError::Status {
                url,
                status: response.status(),
            });
        }

        let text = response.text().await.map_err(|e| FetchError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&text).map_err(|e| FetchError::Malformed {
            url,
            message: e.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl MetricSource for HttpMetricSource {
    async fn fetch_kpis(&self) -> Result<KpiSnapshot, FetchError> {
        self.get_json("/api/kpis").await
    }

    async fn fetch_monthly_revenue(&self) -> Result<Vec<MonthlyRevenuePoint>, FetchError> {
        self.get_json("/api/revenue/monthly").await
    }

    async fn fetch_regional_revenue(&self) -> Result<Vec<RegionalRevenuePoint>, FetchError> {
        self.get_json("/api/revenue/region").await
    }
}
