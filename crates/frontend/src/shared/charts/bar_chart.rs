use contracts::dashboards::d001_overview::RegionalRevenuePoint;
use leptos::prelude::*;

use super::{nice_max, svg_num, value_ticks, ChartFrame, Tick};
use crate::shared::metrics::{format_axis_thousands, format_currency};

pub const BAR_CHART_FRAME: ChartFrame = ChartFrame {
    width: 640.0,
    height: 300.0,
    margin_left: 96.0,
    margin_right: 24.0,
    margin_top: 8.0,
    margin_bottom: 32.0,
};

/// Maximum bar thickness in SVG units
const BAR_SIZE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tooltip: String,
}

impl Bar {
    /// Vertical centre of the bar, where the category label sits
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Horizontal bars, one category per row, rows in input order
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartModel {
    pub frame: ChartFrame,
    pub bars: Vec<Bar>,
    pub x_ticks: Vec<Tick>,
}

impl BarChartModel {
    pub fn build(series: &[RegionalRevenuePoint], frame: ChartFrame) -> Self {
        let max = series.iter().map(|p| p.revenue).fold(0.0, f64::max);
        let axis_max = nice_max(max);
        let to_x = |value: f64| frame.plot_left() + frame.plot_width() * value / axis_max;

        let band = if series.is_empty() {
            0.0
        } else {
            frame.plot_height() / series.len() as f64
        };
        let thickness = BAR_SIZE.min(band * 0.8);

        let bars = series
            .iter()
            .enumerate()
            .map(|(i, point)| Bar {
                label: point.region.clone(),
                x: frame.plot_left(),
                y: frame.plot_top() + band * i as f64 + (band - thickness) / 2.0,
                width: (to_x(point.revenue.max(0.0)) - frame.plot_left()).max(0.0),
                height: thickness,
                tooltip: format!("{}: {}", point.region, format_currency(point.revenue)),
            })
            .collect();

        Self {
            frame,
            bars,
            x_ticks: value_ticks(axis_max, to_x, format_axis_thousands),
        }
    }
}

/// Revenue by region as a horizontal bar chart
#[component]
pub fn RegionalRevenueChart(#[prop(into)] data: Signal<Vec<RegionalRevenuePoint>>) -> impl IntoView {
    let model = Memo::new(move |_| BarChartModel::build(&data.get(), BAR_CHART_FRAME));
    let hovered = RwSignal::new(None::<usize>);

    let tooltip = move || {
        let index = hovered.get()?;
        model.with(|m| m.bars.get(index).map(|b| b.tooltip.clone()))
    };

    view! {
        <div class="chart-container">
            <svg class="chart chart--bar" viewBox=BAR_CHART_FRAME.view_box() role="img">
                <defs>
                    <linearGradient id="chart-bar-color" x1="0" y1="0" x2="1" y2="0">
                        <stop offset="5%" stop-color="#10b981" stop-opacity="0.9"/>
                        <stop offset="95%" stop-color="#10b981" stop-opacity="0.4"/>
                    </linearGradient>
                </defs>
                {move || {
                    let model = model.get();
                    let frame = model.frame;
                    let grid = model.x_ticks.iter().map(|tick| view! {
                        <line
                            class="chart__grid"
                            x1=svg_num(tick.position)
                            x2=svg_num(tick.position)
                            y1=svg_num(frame.plot_top())
                            y2=svg_num(frame.plot_bottom())
                        />
                        <text class="chart__tick" x=svg_num(tick.position) y=svg_num(frame.plot_bottom() + 20.0) text-anchor="middle">
                            {tick.label.clone()}
                        </text>
                    }).collect_view();
                    let bars = model.bars.iter().enumerate().map(|(i, bar)| view! {
                        <text
                            class="chart__tick"
                            x=svg_num(frame.plot_left() - 8.0)
                            y=svg_num(bar.center_y())
                            text-anchor="end"
                            dominant-baseline="middle"
                        >
                            {bar.label.clone()}
                        </text>
                        <rect
                            class="chart__bar"
                            x=svg_num(bar.x)
                            y=svg_num(bar.y)
                            width=svg_num(bar.width)
                            height=svg_num(bar.height)
                            rx="6"
                            fill="url(#chart-bar-color)"
                            on:mouseenter=move |_| hovered.set(Some(i))
                            on:mouseleave=move |_| hovered.set(None)
                        />
                    }).collect_view();
                    view! {
                        <g>{grid}</g>
                        <g>{bars}</g>
                    }
                }}
            </svg>
            {move || tooltip().map(|text| view! { <div class="chart__tooltip">{text}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(names: &[(&str, f64)]) -> Vec<RegionalRevenuePoint> {
        names
            .iter()
            .map(|(name, revenue)| RegionalRevenuePoint::new(*name, *revenue))
            .collect()
    }

    #[test]
    fn test_category_order_matches_input_for_every_permutation() {
        let base = [("North", 40.0), ("South", 10.0), ("East", 30.0)];
        let permutations = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for perm in permutations {
            let input: Vec<(&str, f64)> = perm.iter().map(|&i| base[i]).collect();
            let model = BarChartModel::build(&regions(&input), BAR_CHART_FRAME);
            let labels: Vec<&str> = model.bars.iter().map(|b| b.label.as_str()).collect();
            let expected: Vec<&str> = input.iter().map(|(name, _)| *name).collect();
            assert_eq!(labels, expected);
            assert!(model.bars.windows(2).all(|w| w[0].y < w[1].y));
        }
    }

    #[test]
    fn test_bar_width_is_proportional() {
        let model = BarChartModel::build(
            &regions(&[("East", 50_000.0), ("West", 25_000.0)]),
            BAR_CHART_FRAME,
        );
        let plot_width = BAR_CHART_FRAME.plot_width();
        assert_eq!(model.bars[0].width, plot_width);
        assert_eq!(model.bars[1].width, plot_width / 2.0);
        assert_eq!(model.bars[0].height, BAR_SIZE);
        assert_eq!(model.bars[1].tooltip, "West: $25,000");
        assert_eq!(model.x_ticks.last().map(|t| t.label.as_str()), Some("$50k"));
    }

    #[test]
    fn test_empty_series() {
        let model = BarChartModel::build(&[], BAR_CHART_FRAME);
        assert!(model.bars.is_empty());
        assert!(model.x_ticks.iter().all(|t| t.position.is_finite()));
    }
}
