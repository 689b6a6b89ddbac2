pub mod api_utils;
pub mod charts;
pub mod components;
pub mod icons;
pub mod metrics;
pub mod theme;
