use axum::{http::StatusCode, Json};
use contracts::dashboards::d001_overview::HealthResponse;

use crate::shared::data::dataset::get_dataset;

/// GET /api/health
pub async fn health() -> Result<Json<HealthResponse>, StatusCode> {
    match get_dataset() {
        Ok(dataset) => Ok(Json(HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            records: dataset.records().len(),
            last_updated: dataset.loaded_at().to_rfc3339(),
        })),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
