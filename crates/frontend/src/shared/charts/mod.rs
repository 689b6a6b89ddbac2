//! SVG charts for the revenue series.
//!
//! Each chart is split in two: a `*Model::build` function that maps the input
//! series to plot coordinates and labels, and a component that draws the model.
//! Models never reorder their input.

pub mod bar_chart;
pub mod line_chart;

pub use bar_chart::{BarChartModel, RegionalRevenueChart};
pub use line_chart::{LineChartModel, MonthlyRevenueChart};

/// Number of intervals on the value axis
pub const TICK_INTERVALS: usize = 4;

/// Outer size of a chart and the margins reserved for axis labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl ChartFrame {
    pub fn plot_left(&self) -> f64 {
        self.margin_left
    }

    pub fn plot_top(&self) -> f64 {
        self.margin_top
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn plot_width(&self) -> f64 {
        (self.plot_right() - self.plot_left()).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.plot_bottom() - self.plot_top()).max(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// One labelled position on a value axis
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position along the axis in SVG units
    pub position: f64,
    pub label: String,
}

/// SVG coordinate as attribute text
pub fn svg_num(value: f64) -> String {
    format!("{:.1}", value)
}

/// Smallest "round" number (1, 2, 2.5, 5 × 10ⁿ) that is ≥ `max`
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    for step in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let candidate = step * magnitude;
        if candidate >= max {
            return candidate;
        }
    }
    10.0 * magnitude
}

/// Evenly spaced ticks from 0 to `axis_max`; `position` maps a value to SVG units
pub fn value_ticks(
    axis_max: f64,
    position: impl Fn(f64) -> f64,
    label: impl Fn(f64) -> String,
) -> Vec<Tick> {
    (0..=TICK_INTERVALS)
        .map(|i| {
            let value = axis_max * i as f64 / TICK_INTERVALS as f64;
            Tick {
                value,
                position: position(value),
                label: label(value),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(-5.0), 1.0);
        assert_eq!(nice_max(7.0), 10.0);
        assert_eq!(nice_max(18_000.0), 20_000.0);
        assert_eq!(nice_max(21_000.0), 25_000.0);
        assert_eq!(nice_max(50_000.0), 50_000.0);
    }

    #[test]
    fn test_value_ticks() {
        let ticks = value_ticks(100.0, |v| 200.0 - v, |v| format!("{v}"));
        assert_eq!(ticks.len(), TICK_INTERVALS + 1);
        assert_eq!(ticks[0].value, 0.0);
        assert_eq!(ticks[0].position, 200.0);
        assert_eq!(ticks[4].value, 100.0);
        assert_eq!(ticks[2].label, "50");
    }

    #[test]
    fn test_frame_plot_area() {
        let frame = ChartFrame {
            width: 600.0,
            height: 300.0,
            margin_left: 60.0,
            margin_right: 20.0,
            margin_top: 10.0,
            margin_bottom: 30.0,
        };
        assert_eq!(frame.plot_width(), 520.0);
        assert_eq!(frame.plot_height(), 260.0);
        assert_eq!(frame.view_box(), "0 0 600 300");
    }
}
