use axum::{http::StatusCode, Json};
use contracts::dashboards::d001_overview::{
    CustomerTrendPoint, KpiSnapshot, MonthlyRevenuePoint, RegionalRevenuePoint,
};

use crate::dashboards::d001_overview::service;
use crate::shared::data::dataset::{get_dataset, SalesDataset};

fn dataset() -> Result<&'static SalesDataset, StatusCode> {
    get_dataset().map_err(|e| {
        tracing::error!("D001 Overview: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// GET /api/kpis
pub async fn get_kpis() -> Result<Json<KpiSnapshot>, StatusCode> {
    let kpis = service::get_kpis(dataset()?);
    tracing::info!(
        "D001 Overview: revenue {:.2}, growth {:.2}%, churn {:.2}%",
        kpis.total_revenue,
        kpis.monthly_growth_pct,
        kpis.churn_rate_pct
    );
    Ok(Json(kpis))
}

/// GET /api/revenue/monthly
pub async fn get_revenue_by_month() -> Result<Json<Vec<MonthlyRevenuePoint>>, StatusCode> {
    let months = service::get_revenue_by_month(dataset()?);
    tracing::info!("D001 Overview: returning {} months", months.len());
    Ok(Json(months))
}

/// GET /api/revenue/region
pub async fn get_revenue_by_region() -> Result<Json<Vec<RegionalRevenuePoint>>, StatusCode> {
    let regions = service::get_revenue_by_region(dataset()?);
    tracing::info!("D001 Overview: returning {} regions", regions.len());
    Ok(Json(regions))
}

/// GET /api/customers/trend
pub async fn get_customer_trend() -> Result<Json<Vec<CustomerTrendPoint>>, StatusCode> {
    let trend = service::get_customer_trend(dataset()?);
    tracing::info!("D001 Overview: returning {} customer trend points", trend.len());
    Ok(Json(trend))
}
