use async_trait::async_trait;
use contracts::dashboards::d001_overview::{KpiSnapshot, MonthlyRevenuePoint, RegionalRevenuePoint};

/// Why a metric read failed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("{url} returned malformed data: {message}")]
    Malformed { url: String, message: String },
}

/// The three reads the overview dashboard is built from
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait MetricSource {
    async fn fetch_kpis(&self) -> Result<KpiSnapshot, FetchError>;
    async fn fetch_monthly_revenue(&self) -> Result<Vec<MonthlyRevenuePoint>, FetchError>;
    async fn fetch_regional_revenue(&self) -> Result<Vec<RegionalRevenuePoint>, FetchError>;
}
