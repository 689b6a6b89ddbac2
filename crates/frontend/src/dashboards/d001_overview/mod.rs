pub mod api;
pub mod controller;
pub mod model;
pub mod source;
pub mod ui;

pub use api::HttpMetricSource;
pub use controller::{DashboardController, DashboardState, LoadStatus};
pub use source::{FetchError, MetricSource};
