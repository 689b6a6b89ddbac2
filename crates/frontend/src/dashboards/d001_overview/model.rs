use contracts::dashboards::d001_overview::{KpiSnapshot, MonthlyRevenuePoint, RegionalRevenuePoint};

use crate::shared::components::kpi_card::KpiCardModel;
use crate::shared::icons::IconKind;
use crate::shared::metrics::{
    classify_trend, derive_monthly_growth, format_count, format_currency, format_percent,
    latest_change, to_sparkline, ChangeKind, SparklineSeries, Trend,
};

/// Months shown in the churn and customer sparklines
pub const SPARKLINE_WINDOW: usize = 5;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparklineSet {
    /// Raw monthly revenue
    pub total_revenue: SparklineSeries,
    /// Month-over-month revenue growth, %
    pub monthly_growth: SparklineSeries,
    /// Churn % of the last months
    pub churn_rate: SparklineSeries,
    /// Customers of the last months
    pub customers: SparklineSeries,
}

/// Everything the overview renders, derived from one successful fetch
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewModel {
    pub kpis: KpiSnapshot,
    pub monthly: Vec<MonthlyRevenuePoint>,
    pub regional: Vec<RegionalRevenuePoint>,
    pub sparklines: SparklineSet,
    /// Revenue, growth, churn, customers
    pub cards: Vec<KpiCardModel>,
}

/// Trailing window of a per-month history; empty when no month carries the value
fn recent_history(
    monthly: &[MonthlyRevenuePoint],
    value: impl Fn(&MonthlyRevenuePoint) -> Option<f64>,
) -> Vec<Option<f64>> {
    let window = &monthly[monthly.len().saturating_sub(SPARKLINE_WINDOW)..];
    let history: Vec<Option<f64>> = window.iter().map(value).collect();
    if history.iter().all(Option::is_none) {
        Vec::new()
    } else {
        history
    }
}

fn trend_of(change: Option<f64>) -> Trend {
    change.map(classify_trend).unwrap_or_default()
}

pub fn build_view_model(
    kpis: KpiSnapshot,
    monthly: Vec<MonthlyRevenuePoint>,
    regional: Vec<RegionalRevenuePoint>,
) -> DashboardViewModel {
    let revenue: Vec<Option<f64>> = monthly.iter().map(|m| Some(m.revenue)).collect();
    let growth = derive_monthly_growth(&monthly);
    let churn = recent_history(&monthly, MonthlyRevenuePoint::churn_rate_pct);
    let customers = recent_history(&monthly, |m| m.customers.map(|c| c as f64));

    let sparklines = SparklineSet {
        total_revenue: to_sparkline(&revenue),
        monthly_growth: to_sparkline(&growth),
        churn_rate: to_sparkline(&churn),
        customers: to_sparkline(&customers),
    };

    let revenue_change = latest_change(&revenue, ChangeKind::Relative);
    let growth_change = latest_change(&growth, ChangeKind::Absolute);
    let churn_change = latest_change(&churn, ChangeKind::Absolute);
    let customers_change = latest_change(&customers, ChangeKind::Relative);

    let cards = vec![
        KpiCardModel {
            label: "Total Revenue",
            icon: IconKind::Revenue,
            value: format_currency(kpis.total_revenue),
            suffix: None,
            trend: trend_of(revenue_change),
            change: revenue_change,
            change_kind: ChangeKind::Relative,
            sparkline: sparklines.total_revenue.clone(),
        },
        KpiCardModel {
            label: "Monthly Growth",
            icon: IconKind::Growth,
            value: format_percent(kpis.monthly_growth_pct),
            suffix: Some("%"),
            trend: trend_of(growth_change),
            change: growth_change,
            change_kind: ChangeKind::Absolute,
            sparkline: sparklines.monthly_growth.clone(),
        },
        KpiCardModel {
            label: "Churn Rate",
            icon: IconKind::Churn,
            value: format_percent(kpis.churn_rate_pct),
            suffix: Some("%"),
            trend: trend_of(churn_change),
            change: churn_change,
            change_kind: ChangeKind::Absolute,
            sparkline: sparklines.churn_rate.clone(),
        },
        KpiCardModel {
            label: "Total Customers",
            icon: IconKind::Customers,
            value: format_count(kpis.customers),
            suffix: None,
            trend: trend_of(customers_change),
            change: customers_change,
            change_kind: ChangeKind::Relative,
            sparkline: sparklines.customers.clone(),
        },
    ];

    DashboardViewModel {
        kpis,
        monthly,
        regional,
        sparklines,
        cards,
    }
}

/// Rejects payloads that parsed but break the data model (negative or non-finite values)
pub fn validate_payload(
    kpis: &KpiSnapshot,
    monthly: &[MonthlyRevenuePoint],
    regional: &[RegionalRevenuePoint],
) -> Result<(), String> {
    let valid = |v: f64| v.is_finite() && v >= 0.0;

    if !valid(kpis.total_revenue) {
        return Err(format!("total_revenue is {}", kpis.total_revenue));
    }
    if !kpis.monthly_growth_pct.is_finite() || !kpis.churn_rate_pct.is_finite() {
        return Err("KPI percentages must be finite".to_string());
    }
    if let Some(point) = monthly.iter().find(|p| !valid(p.revenue)) {
        return Err(format!("revenue of month {} is {}", point.month, point.revenue));
    }
    if let Some(point) = regional.iter().find(|p| !valid(p.revenue)) {
        return Err(format!("revenue of region {} is {}", point.region, point.revenue));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kpis() -> KpiSnapshot {
        KpiSnapshot {
            total_revenue: 1_234_567.0,
            monthly_growth_pct: -20.0,
            churn_rate_pct: 3.81,
            customers: 4012,
        }
    }

    fn month(key: &str, revenue: f64, customers: u64, churned: u64) -> MonthlyRevenuePoint {
        MonthlyRevenuePoint {
            month: key.to_string(),
            revenue,
            customers: Some(customers),
            churned: Some(churned),
        }
    }

    fn monthly() -> Vec<MonthlyRevenuePoint> {
        vec![
            month("2025-01", 90.0, 100, 5),
            month("2025-02", 100.0, 100, 5),
            month("2025-03", 150.0, 200, 8),
            month("2025-04", 120.0, 250, 5),
            month("2025-05", 120.0, 300, 6),
            month("2025-06", 180.0, 400, 4),
        ]
    }

    #[test]
    fn test_revenue_and_growth_sparklines_match_source_length() {
        let vm = build_view_model(kpis(), monthly(), Vec::new());
        assert_eq!(vm.sparklines.total_revenue.len(), 6);
        assert_eq!(vm.sparklines.monthly_growth.len(), 6);
        assert_eq!(vm.sparklines.monthly_growth[0].value, Some(0.0));
        assert_eq!(vm.sparklines.total_revenue[2].value, Some(150.0));
    }

    #[test]
    fn test_history_sparklines_use_trailing_window() {
        let vm = build_view_model(kpis(), monthly(), Vec::new());
        assert_eq!(vm.sparklines.churn_rate.len(), SPARKLINE_WINDOW);
        assert_eq!(vm.sparklines.customers.len(), SPARKLINE_WINDOW);
        // window starts at 2025-02, most recent last
        assert_eq!(vm.sparklines.customers[0].value, Some(100.0));
        assert_eq!(vm.sparklines.customers[4].value, Some(400.0));
        assert_eq!(vm.sparklines.churn_rate[4].value, Some(1.0));
    }

    #[test]
    fn test_history_sparklines_empty_without_customer_fields() {
        let plain = vec![
            MonthlyRevenuePoint::new("2025-01", 10.0),
            MonthlyRevenuePoint::new("2025-02", 20.0),
        ];
        let vm = build_view_model(kpis(), plain, Vec::new());
        assert!(vm.sparklines.churn_rate.is_empty());
        assert!(vm.sparklines.customers.is_empty());
        assert_eq!(vm.cards[2].change, None);
        assert_eq!(vm.cards[2].trend, Trend::Flat);
    }

    #[test]
    fn test_every_card_trend_is_derived_from_data() {
        let vm = build_view_model(kpis(), monthly(), Vec::new());
        let labels: Vec<&str> = vm.cards.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec!["Total Revenue", "Monthly Growth", "Churn Rate", "Total Customers"]
        );

        // revenue 120 -> 180
        assert_eq!(vm.cards[0].change, Some(50.0));
        assert_eq!(vm.cards[0].trend, Trend::Up);
        // growth 0% -> 50%
        assert_eq!(vm.cards[1].change, Some(50.0));
        assert_eq!(vm.cards[1].trend, Trend::Up);
        // churn 2% -> 1%
        assert_eq!(vm.cards[2].change, Some(-1.0));
        assert_eq!(vm.cards[2].trend, Trend::Down);
        // customers 300 -> 400
        let customers_change = vm.cards[3].change.unwrap();
        assert!((customers_change - 33.333).abs() < 0.001);
        assert_eq!(vm.cards[3].trend, Trend::Up);
    }

    #[test]
    fn test_percentage_cards_change_in_points() {
        let vm = build_view_model(kpis(), monthly(), Vec::new());
        let kinds: Vec<ChangeKind> = vm.cards.iter().map(|c| c.change_kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChangeKind::Relative,
                ChangeKind::Absolute,
                ChangeKind::Absolute,
                ChangeKind::Relative,
            ]
        );
    }

    #[test]
    fn test_card_values_are_formatted() {
        let vm = build_view_model(kpis(), monthly(), Vec::new());
        assert_eq!(vm.cards[0].value, "$1,234,567");
        assert_eq!(vm.cards[1].value, "-20.00");
        assert_eq!(vm.cards[1].suffix, Some("%"));
        assert_eq!(vm.cards[2].value, "3.81");
        assert_eq!(vm.cards[3].value, "4,012");
        assert_eq!(vm.cards[3].suffix, None);
    }

    #[test]
    fn test_regional_order_is_preserved() {
        let regional = vec![
            RegionalRevenuePoint::new("West", 1.0),
            RegionalRevenuePoint::new("East", 3.0),
            RegionalRevenuePoint::new("North", 2.0),
        ];
        let vm = build_view_model(kpis(), monthly(), regional.clone());
        assert_eq!(vm.regional, regional);
    }

    #[test]
    fn test_build_is_bit_identical_across_runs() {
        let input = vec![
            month("2025-01", 0.0, 3, 1),
            month("2025-02", 1234.5678, 7, 2),
            month("2025-03", 987.654321, 11, 0),
        ];
        let first = build_view_model(kpis(), input.clone(), Vec::new());
        let second = build_view_model(kpis(), input, Vec::new());

        let bits = |s: &SparklineSeries| -> Vec<Option<u64>> {
            s.iter().map(|p| p.value.map(f64::to_bits)).collect()
        };
        assert_eq!(bits(&first.sparklines.monthly_growth), bits(&second.sparklines.monthly_growth));
        assert_eq!(bits(&first.sparklines.churn_rate), bits(&second.sparklines.churn_rate));
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_payload() {
        assert!(validate_payload(&kpis(), &monthly(), &[]).is_ok());

        let negative = vec![MonthlyRevenuePoint::new("2025-01", -1.0)];
        assert!(validate_payload(&kpis(), &negative, &[]).is_err());

        let nan_region = vec![RegionalRevenuePoint::new("East", f64::NAN)];
        assert!(validate_payload(&kpis(), &[], &nan_region).is_err());
    }
}
