use contracts::dashboards::d001_overview::MonthlyRevenuePoint;

/// Direction of a change, drives card colours and icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

impl Trend {
    /// Short qualitative phrase shown under the card value
    pub fn phrase(&self) -> &'static str {
        match self {
            Trend::Up => "Improving",
            Trend::Down => "Declining",
            Trend::Flat => "Stable",
        }
    }

    /// BEM modifier used by card and sparkline styles
    pub fn modifier(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        }
    }
}

/// One sparkline sample; `None` is an undefined value and renders as a gap
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SparklinePoint {
    pub value: Option<f64>,
}

pub type SparklineSeries = Vec<SparklinePoint>;

/// How the latest change of a history series is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Percent growth relative to the previous value
    Relative,
    /// Plain difference, for series that already are percentages
    Absolute,
}

/// Period-over-period growth in percent
///
/// The first element is always `Some(0.0)`. An element whose previous value
/// is zero is `None`: growth from zero is undefined, and the gap is kept so
/// the output lines up with the input.
pub fn derive_growth(values: &[f64]) -> Vec<Option<f64>> {
    let mut growth = Vec::with_capacity(values.len());
    for (i, &current) in values.iter().enumerate() {
        if i == 0 {
            growth.push(Some(0.0));
            continue;
        }
        let previous = values[i - 1];
        if previous == 0.0 {
            log::warn!("growth undefined at index {}: previous value is zero", i);
            growth.push(None);
        } else {
            growth.push(Some((current - previous) / previous * 100.0));
        }
    }
    growth
}

/// Month-over-month revenue growth, same length and order as `series`
pub fn derive_monthly_growth(series: &[MonthlyRevenuePoint]) -> Vec<Option<f64>> {
    let revenues: Vec<f64> = series.iter().map(|point| point.revenue).collect();
    derive_growth(&revenues)
}

/// Wraps each scalar as a sparkline point, preserving order
pub fn to_sparkline<T>(series: &[T]) -> SparklineSeries
where
    T: Into<Option<f64>> + Copy,
{
    series
        .iter()
        .map(|&value| SparklinePoint {
            value: value.into(),
        })
        .collect()
}

pub fn classify_trend(change: f64) -> Trend {
    if change > 0.0 {
        Trend::Up
    } else if change < 0.0 {
        Trend::Down
    } else {
        // zero and NaN
        Trend::Flat
    }
}

/// Change between the last two values of `history`
///
/// `None` when there are fewer than two values, either of them is undefined,
/// or a relative change would divide by zero.
pub fn latest_change(history: &[Option<f64>], kind: ChangeKind) -> Option<f64> {
    let [.., previous, last] = history else {
        return None;
    };
    let (previous, last) = ((*previous)?, (*last)?);
    match kind {
        ChangeKind::Absolute => Some(last - previous),
        ChangeKind::Relative if previous == 0.0 => None,
        ChangeKind::Relative => Some((last - previous) / previous * 100.0),
    }
}
