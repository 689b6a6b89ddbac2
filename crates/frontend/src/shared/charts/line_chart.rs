use contracts::dashboards::d001_overview::MonthlyRevenuePoint;
use leptos::prelude::*;

use super::{nice_max, svg_num, value_ticks, ChartFrame, Tick};
use crate::shared::metrics::{format_axis_thousands, format_currency};

pub const LINE_CHART_FRAME: ChartFrame = ChartFrame {
    width: 640.0,
    height: 300.0,
    margin_left: 56.0,
    margin_right: 16.0,
    margin_top: 16.0,
    margin_bottom: 32.0,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub tooltip: String,
}

/// Plot coordinates for the monthly revenue line
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartModel {
    pub frame: ChartFrame,
    /// One point per month, in input order
    pub points: Vec<LinePoint>,
    pub y_ticks: Vec<Tick>,
}

impl LineChartModel {
    pub fn build(series: &[MonthlyRevenuePoint], frame: ChartFrame) -> Self {
        let max = series.iter().map(|p| p.revenue).fold(0.0, f64::max);
        let axis_max = nice_max(max);
        let to_y = |value: f64| frame.plot_bottom() - frame.plot_height() * value / axis_max;

        let count = series.len();
        let points = series
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let x = if count == 1 {
                    frame.plot_left() + frame.plot_width() / 2.0
                } else {
                    frame.plot_left() + frame.plot_width() * i as f64 / (count - 1) as f64
                };
                LinePoint {
                    label: point.month.clone(),
                    x,
                    y: to_y(point.revenue),
                    tooltip: format!("{}: {}", point.month, format_currency(point.revenue)),
                }
            })
            .collect();

        Self {
            frame,
            points,
            y_ticks: value_ticks(axis_max, to_y, format_axis_thousands),
        }
    }

    /// SVG path through all points, empty when there are none
    pub fn line_path(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{cmd}{:.1},{:.1}", p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Revenue by month as a line chart
#[component]
pub fn MonthlyRevenueChart(#[prop(into)] data: Signal<Vec<MonthlyRevenuePoint>>) -> impl IntoView {
    let model = Memo::new(move |_| LineChartModel::build(&data.get(), LINE_CHART_FRAME));
    let hovered = RwSignal::new(None::<usize>);

    let tooltip = move || {
        let index = hovered.get()?;
        model.with(|m| m.points.get(index).map(|p| p.tooltip.clone()))
    };

    view! {
        <div class="chart-container">
            <svg class="chart chart--line" viewBox=LINE_CHART_FRAME.view_box() role="img">
                <defs>
                    <linearGradient id="chart-line-color" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="5%" stop-color="#6366f1" stop-opacity="0.9"/>
                        <stop offset="95%" stop-color="#6366f1" stop-opacity="0.2"/>
                    </linearGradient>
                </defs>
                {move || {
                    let model = model.get();
                    let frame = model.frame;
                    let grid = model.y_ticks.iter().map(|tick| view! {
                        <line
                            class="chart__grid"
                            x1=svg_num(frame.plot_left())
                            x2=svg_num(frame.plot_right())
                            y1=svg_num(tick.position)
                            y2=svg_num(tick.position)
                        />
                        <text
                            class="chart__tick"
                            x=svg_num(frame.plot_left() - 8.0)
                            y=svg_num(tick.position)
                            text-anchor="end"
                            dominant-baseline="middle"
                        >
                            {tick.label.clone()}
                        </text>
                    }).collect_view();
                    let x_labels = model.points.iter().map(|p| view! {
                        <text class="chart__tick" x=svg_num(p.x) y=svg_num(frame.plot_bottom() + 20.0) text-anchor="middle">
                            {p.label.clone()}
                        </text>
                    }).collect_view();
                    let dots = model.points.iter().enumerate().map(|(i, p)| view! {
                        <circle
                            class="chart__dot"
                            cx=svg_num(p.x)
                            cy=svg_num(p.y)
                            r="4"
                            fill="#6366f1"
                            on:mouseenter=move |_| hovered.set(Some(i))
                            on:mouseleave=move |_| hovered.set(None)
                        />
                    }).collect_view();
                    view! {
                        <g>{grid}</g>
                        <g>{x_labels}</g>
                        <path class="chart__line" d=model.line_path() fill="none" stroke="url(#chart-line-color)" stroke-width="3"/>
                        <g>{dots}</g>
                    }
                }}
            </svg>
            {move || tooltip().map(|text| view! { <div class="chart__tooltip">{text}</div> })}
        </div>
    }
}
