use leptos::prelude::*;

use crate::shared::charts::svg_num;
use crate::shared::metrics::{format_number_with_decimals, SparklinePoint, Trend};

const SPARKLINE_WIDTH: f64 = 120.0;
const SPARKLINE_HEIGHT: f64 = 40.0;
/// Keeps the stroke inside the viewBox at the extremes
const SPARKLINE_PADDING: f64 = 3.0;

/// Palette of a sparkline; depends on the trend only, never on the values
pub fn sparkline_color(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "#22c55e",
        Trend::Down => "#ef4444",
        Trend::Flat => "#64748b",
    }
}

/// Gradient id unique per card label: "Total Revenue" → "sparkline-gradient-TotalRevenue"
pub fn gradient_id(label: &str) -> String {
    let compact: String = label.chars().filter(|c| !c.is_whitespace()).collect();
    format!("sparkline-gradient-{compact}")
}

/// Plot coordinates of a sparkline; undefined points split the line into segments
#[derive(Debug, Clone, PartialEq)]
pub struct SparklineGeometry {
    pub segments: Vec<Vec<(f64, f64)>>,
}

impl SparklineGeometry {
    pub fn build(points: &[SparklinePoint], width: f64, height: f64) -> Self {
        let defined = points.iter().filter_map(|p| p.value);
        let (min, max) = defined.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

        let inner_height = height - 2.0 * SPARKLINE_PADDING;
        let to_y = |value: f64| {
            if max > min {
                SPARKLINE_PADDING + inner_height * (max - value) / (max - min)
            } else {
                height / 2.0
            }
        };
        let to_x = |i: usize| {
            if points.len() > 1 {
                width * i as f64 / (points.len() - 1) as f64
            } else {
                width / 2.0
            }
        };

        let mut segments = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for (i, point) in points.iter().enumerate() {
            match point.value {
                Some(value) => current.push((to_x(i), to_y(value))),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        Self { segments }
    }

    pub fn line_path(&self) -> String {
        self.segments
            .iter()
            .map(|segment| {
                segment
                    .iter()
                    .enumerate()
                    .map(|(i, (x, y))| {
                        let cmd = if i == 0 { 'M' } else { 'L' };
                        format!("{cmd}{:.1},{:.1}", x, y)
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Closed area under each segment down to `baseline`
    pub fn area_path(&self, baseline: f64) -> String {
        self.segments
            .iter()
            .filter(|segment| segment.len() > 1)
            .map(|segment| {
                let mut path = String::new();
                for (i, (x, y)) in segment.iter().enumerate() {
                    let cmd = if i == 0 { 'M' } else { 'L' };
                    path.push_str(&format!("{cmd}{:.1},{:.1} ", x, y));
                }
                if let (Some(first), Some(last)) = (segment.first(), segment.last()) {
                    path.push_str(&format!("L{:.1},{:.1} L{:.1},{:.1} Z", last.0, baseline, first.0, baseline));
                }
                path
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Compact line + area chart without axes
#[component]
pub fn Sparkline(
    /// Card label, used to keep gradient ids unique on the page
    label: &'static str,
    points: Vec<SparklinePoint>,
    trend: Trend,
    /// Appended to the value in the hover tooltip
    #[prop(optional, into)]
    suffix: Option<&'static str>,
) -> impl IntoView {
    let geometry = SparklineGeometry::build(&points, SPARKLINE_WIDTH, SPARKLINE_HEIGHT);
    let color = sparkline_color(trend);
    let id = gradient_id(label);
    let fill = format!("url(#{id})");
    let stroke_width = if trend == Trend::Down { "3.5" } else { "2.5" };
    let hovered = RwSignal::new(None::<String>);

    let hover_targets = geometry
        .segments
        .iter()
        .flatten()
        .zip(points.iter().filter_map(|p| p.value))
        .map(|(&(x, y), value)| {
            let text = format!(
                "{}{}",
                format_number_with_decimals(value, 2),
                suffix.unwrap_or_default()
            );
            view! {
                <circle
                    class="sparkline__target"
                    cx=svg_num(x)
                    cy=svg_num(y)
                    r="5"
                    fill="transparent"
                    on:mouseenter=move |_| hovered.set(Some(text.clone()))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view();

    view! {
        <div class="sparkline">
            <svg
                class=format!("sparkline__svg sparkline__svg--{}", trend.modifier())
                viewBox=format!("0 0 {} {}", SPARKLINE_WIDTH, SPARKLINE_HEIGHT)
                preserveAspectRatio="none"
            >
                <defs>
                    <linearGradient id=id x1="0" y1="0" x2="0" y2="1">
                        <stop offset="5%" stop-color=color stop-opacity="0.9"/>
                        <stop offset="95%" stop-color=color stop-opacity="0.1"/>
                    </linearGradient>
                </defs>
                <path class="sparkline__area" d=geometry.area_path(SPARKLINE_HEIGHT) fill=fill stroke="none"/>
                <path class="sparkline__line" d=geometry.line_path() fill="none" stroke=color stroke-width=stroke_width/>
                {hover_targets}
            </svg>
            {move || hovered.get().map(|text| view! { <div class="sparkline__tooltip">{text}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metrics::to_sparkline;

    #[test]
    fn test_color_depends_on_trend_only() {
        assert_eq!(sparkline_color(Trend::Up), "#22c55e");
        assert_eq!(sparkline_color(Trend::Down), "#ef4444");
        assert_ne!(sparkline_color(Trend::Flat), sparkline_color(Trend::Up));
    }

    #[test]
    fn test_gradient_id_strips_whitespace() {
        assert_eq!(gradient_id("Total Revenue"), "sparkline-gradient-TotalRevenue");
        assert_ne!(gradient_id("Churn Rate"), gradient_id("Total Customers"));
    }

    #[test]
    fn test_geometry_spans_width_and_height() {
        let geometry = SparklineGeometry::build(&to_sparkline(&[1.0, 3.0, 2.0]), 100.0, 40.0);
        assert_eq!(geometry.segments.len(), 1);
        let segment = &geometry.segments[0];
        assert_eq!(segment.len(), 3);
        assert_eq!(segment[0].0, 0.0);
        assert_eq!(segment[2].0, 100.0);
        // max value at the top, min value at the bottom
        assert_eq!(segment[1].1, SPARKLINE_PADDING);
        assert_eq!(segment[0].1, 40.0 - SPARKLINE_PADDING);
    }

    #[test]
    fn test_gap_splits_segments() {
        let points = to_sparkline(&[Some(0.0), Some(5.0), None, Some(2.0), Some(4.0)]);
        let geometry = SparklineGeometry::build(&points, 100.0, 40.0);
        assert_eq!(geometry.segments.len(), 2);
        assert_eq!(geometry.segments[0].len(), 2);
        assert_eq!(geometry.segments[1][0].0, 75.0);
        assert_eq!(geometry.line_path().matches('M').count(), 2);
    }

    #[test]
    fn test_flat_and_empty_series() {
        let flat = SparklineGeometry::build(&to_sparkline(&[7.0, 7.0]), 100.0, 40.0);
        assert!(flat.segments[0].iter().all(|&(_, y)| y == 20.0));

        let empty = SparklineGeometry::build(&[], 100.0, 40.0);
        assert!(empty.segments.is_empty());
        assert_eq!(empty.line_path(), "");
        assert_eq!(empty.area_path(40.0), "");
    }
}
