use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::system::middleware::request_logger::request_logger;

/// All application routes
pub fn configure_routes(static_dir: &str, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/health", get(handlers::health::health))
        // ========================================
        // D001 OVERVIEW DASHBOARD
        // ========================================
        .route("/api/kpis", get(handlers::d001_overview::get_kpis))
        .route(
            "/api/revenue/monthly",
            get(handlers::d001_overview::get_revenue_by_month),
        )
        .route(
            "/api/revenue/region",
            get(handlers::d001_overview::get_revenue_by_region),
        )
        .route(
            "/api/customers/trend",
            get(handlers::d001_overview::get_customer_trend),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
