use contracts::dashboards::d001_overview::{
    CustomerTrendPoint, KpiSnapshot, MonthlyRevenuePoint, RegionalRevenuePoint,
};
use std::collections::BTreeMap;

use crate::shared::data::dataset::SalesDataset;
use crate::shared::format::round2;

#[derive(Debug, Default, Clone, Copy)]
struct MonthAgg {
    revenue: f64,
    customers: u64,
    churned: u64,
}

/// Per-month totals, ordered by month key
fn aggregate_by_month(dataset: &SalesDataset) -> BTreeMap<String, MonthAgg> {
    let mut months: BTreeMap<String, MonthAgg> = BTreeMap::new();
    for record in dataset.records() {
        let agg = months.entry(record.month_key()).or_default();
        agg.revenue += record.revenue;
        agg.customers += record.customers;
        agg.churned += record.churned;
    }
    months
}

/// Headline KPIs over the whole dataset
pub fn get_kpis(dataset: &SalesDataset) -> KpiSnapshot {
    let months: Vec<MonthAgg> = aggregate_by_month(dataset).into_values().collect();

    let total_revenue: f64 = dataset.records().iter().map(|r| r.revenue).sum();

    // Last month vs the one before it
    let monthly_growth_pct = match months.as_slice() {
        [.., prev, last] if prev.revenue != 0.0 => {
            (last.revenue - prev.revenue) / prev.revenue * 100.0
        }
        _ => 0.0,
    };

    let total_churned: u64 = dataset.records().iter().map(|r| r.churned).sum();
    let total_customers: u64 = dataset.records().iter().map(|r| r.customers).sum();
    let churn_rate_pct = if total_customers > 0 {
        total_churned as f64 / total_customers as f64 * 100.0
    } else {
        0.0
    };

    KpiSnapshot {
        total_revenue: round2(total_revenue),
        monthly_growth_pct: round2(monthly_growth_pct),
        churn_rate_pct: round2(churn_rate_pct),
        customers: total_customers,
    }
}

/// Revenue per month in chronological order, with the month's customer counts
pub fn get_revenue_by_month(dataset: &SalesDataset) -> Vec<MonthlyRevenuePoint> {
    aggregate_by_month(dataset)
        .into_iter()
        .map(|(month, agg)| MonthlyRevenuePoint {
            month,
            revenue: agg.revenue,
            customers: Some(agg.customers),
            churned: Some(agg.churned),
        })
        .collect()
}

/// Revenue per region, regions in alphabetical order
pub fn get_revenue_by_region(dataset: &SalesDataset) -> Vec<RegionalRevenuePoint> {
    let mut regions: BTreeMap<&str, f64> = BTreeMap::new();
    for record in dataset.records() {
        *regions.entry(record.region.as_str()).or_insert(0.0) += record.revenue;
    }
    regions
        .into_iter()
        .map(|(region, revenue)| RegionalRevenuePoint::new(region, revenue))
        .collect()
}

/// Customers per calendar day in chronological order
pub fn get_customer_trend(dataset: &SalesDataset) -> Vec<CustomerTrendPoint> {
    let mut days = BTreeMap::new();
    for record in dataset.records() {
        *days.entry(record.date).or_insert(0u64) += record.customers;
    }
    days.into_iter()
        .map(|(date, customers)| CustomerTrendPoint {
            date: date.format("%Y-%m-%d").to_string(),
            customers,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::dataset::SalesRecord;
    use chrono::NaiveDate;

    fn record(date: &str, region: &str, revenue: f64, customers: u64, churned: u64) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            region: region.to_string(),
            revenue,
            customers,
            churned,
        }
    }

    fn sample() -> SalesDataset {
        SalesDataset::new(vec![
            record("2025-02-10", "West", 100.0, 50, 2),
            record("2025-01-05", "East", 60.0, 30, 1),
            record("2025-01-20", "West", 40.0, 20, 1),
            record("2025-03-01", "East", 120.0, 100, 2),
            record("2025-02-10", "North", 50.0, 0, 0),
        ])
    }

    #[test]
    fn test_revenue_by_month_is_chronological() {
        let months = get_revenue_by_month(&sample());
        let keys: Vec<&str> = months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(keys, vec!["2025-01", "2025-02", "2025-03"]);
        assert_eq!(months[0].revenue, 100.0);
        assert_eq!(months[1].revenue, 150.0);
        assert_eq!(months[1].customers, Some(50));
        assert_eq!(months[1].churned, Some(2));
    }

    #[test]
    fn test_kpis() {
        let kpis = get_kpis(&sample());
        assert_eq!(kpis.total_revenue, 370.0);
        // 150 -> 120
        assert_eq!(kpis.monthly_growth_pct, -20.0);
        assert_eq!(kpis.customers, 200);
        assert_eq!(kpis.churn_rate_pct, 3.0);
    }

    #[test]
    fn test_kpis_single_month_has_zero_growth() {
        let dataset = SalesDataset::new(vec![record("2025-01-05", "East", 60.0, 30, 1)]);
        assert_eq!(get_kpis(&dataset).monthly_growth_pct, 0.0);
    }

    #[test]
    fn test_kpis_empty_dataset() {
        let kpis = get_kpis(&SalesDataset::new(Vec::new()));
        assert_eq!(kpis.total_revenue, 0.0);
        assert_eq!(kpis.monthly_growth_pct, 0.0);
        assert_eq!(kpis.churn_rate_pct, 0.0);
        assert_eq!(kpis.customers, 0);
    }

    #[test]
    fn test_kpis_previous_month_without_revenue() {
        let dataset = SalesDataset::new(vec![
            record("2025-01-05", "East", 0.0, 1, 0),
            record("2025-02-05", "East", 10.0, 1, 0),
        ]);
        assert_eq!(get_kpis(&dataset).monthly_growth_pct, 0.0);
    }

    #[test]
    fn test_revenue_by_region_sums_and_sorts() {
        let regions = get_revenue_by_region(&sample());
        assert_eq!(
            regions,
            vec![
                RegionalRevenuePoint::new("East", 180.0),
                RegionalRevenuePoint::new("North", 50.0),
                RegionalRevenuePoint::new("West", 140.0),
            ]
        );
    }

    #[test]
    fn test_customer_trend_groups_by_day() {
        let trend = get_customer_trend(&sample());
        assert_eq!(trend.len(), 4);
        assert_eq!(trend[0].date, "2025-01-05");
        assert_eq!(trend[2].date, "2025-02-10");
        assert_eq!(trend[2].customers, 50);
    }
}
