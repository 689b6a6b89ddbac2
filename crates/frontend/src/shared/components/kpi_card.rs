use leptos::prelude::*;

use super::sparkline::Sparkline;
use crate::shared::icons::{icon, trend_icon, IconKind};
use crate::shared::metrics::{format_change, format_change_points, ChangeKind, SparklineSeries, Trend};

/// Everything a KPI card renders; the value arrives pre-formatted
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCardModel {
    pub label: &'static str,
    pub icon: IconKind,
    pub value: String,
    pub suffix: Option<&'static str>,
    pub trend: Trend,
    /// Change vs the previous month; `None` hides the badge
    pub change: Option<f64>,
    /// `Relative` changes read as %, `Absolute` ones as percentage points
    pub change_kind: ChangeKind,
    pub sparkline: SparklineSeries,
}

/// Badge text, e.g. `"+12.5% vs last month"` or `"-1.0 pp vs last month"`
pub fn change_badge(trend: Trend, change: f64, kind: ChangeKind) -> String {
    let amount = match kind {
        ChangeKind::Relative => format_change(trend, change),
        ChangeKind::Absolute => format_change_points(trend, change),
    };
    format!("{amount} vs last month")
}

#[component]
pub fn KpiCard(card: KpiCardModel) -> impl IntoView {
    let KpiCardModel {
        label,
        icon: icon_kind,
        value,
        suffix,
        trend,
        change,
        change_kind,
        sparkline,
    } = card;

    let modifier = trend.modifier();

    let badge = change.map(|change| {
        view! {
            <span class=format!("kpi-card__badge kpi-card__badge--{modifier}")>
                {change_badge(trend, change, change_kind)}
            </span>
        }
    });

    let chart = (!sparkline.is_empty()).then(|| {
        view! { <Sparkline label=label points=sparkline trend=trend suffix=suffix.unwrap_or_default()/> }
    });

    view! {
        <div class=format!("kpi-card kpi-card--{modifier}")>
            <div class="kpi-card__header">
                <span class="kpi-card__label">{label}</span>
                <div class="kpi-card__icon">{icon(icon_kind)}</div>
            </div>
            <div class="kpi-card__body">
                <div class="kpi-card__value">
                    {value}
                    {suffix.unwrap_or_default()}
                </div>
                {badge}
            </div>
            <div class=format!("kpi-card__trend kpi-card__trend--{modifier}")>
                {trend_icon(trend)}
                <span>{trend.phrase()}</span>
            </div>
            {chart}
        </div>
    }
}
