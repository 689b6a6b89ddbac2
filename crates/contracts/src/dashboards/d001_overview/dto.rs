use serde::{Deserialize, Serialize};

/// Headline KPI snapshot returned by `GET /api/kpis`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub total_revenue: f64,
    /// Last month vs previous month revenue, in percent
    pub monthly_growth_pct: f64,
    pub churn_rate_pct: f64,
    pub customers: u64,
}

/// One month of revenue, `GET /api/revenue/monthly` returns them sorted by month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenuePoint {
    /// Month key in format "YYYY-MM"
    pub month: String,
    pub revenue: f64,
    /// Customers counted in the month (absent on older servers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customers: Option<u64>,
    /// Customers lost in the month (absent on older servers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub churned: Option<u64>,
}

impl MonthlyRevenuePoint {
    pub fn new(month: impl Into<String>, revenue: f64) -> Self {
        Self {
            month: month.into(),
            revenue,
            customers: None,
            churned: None,
        }
    }

    /// Churn rate of the month in percent, `None` when the month has no customer data
    pub fn churn_rate_pct(&self) -> Option<f64> {
        match (self.churned, self.customers) {
            (Some(churned), Some(customers)) if customers > 0 => {
                Some(churned as f64 / customers as f64 * 100.0)
            }
            (Some(_), Some(_)) => Some(0.0),
            _ => None,
        }
    }
}

/// Revenue of one region, `GET /api/revenue/region`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalRevenuePoint {
    pub region: String,
    pub revenue: f64,
}

impl RegionalRevenuePoint {
    pub fn new(region: impl Into<String>, revenue: f64) -> Self {
        Self {
            region: region.into(),
            revenue,
        }
    }
}

/// Customers per day, `GET /api/customers/trend`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerTrendPoint {
    /// Date in format "YYYY-MM-DD"
    pub date: String,
    pub customers: u64,
}

/// `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of rows in the loaded dataset
    pub records: usize,
    /// RFC 3339 timestamp of the dataset load
    pub last_updated: String,
}
