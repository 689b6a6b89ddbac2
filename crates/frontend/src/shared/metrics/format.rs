//! Number formatting for cards, tooltips and chart axes (en-US grouping)

use super::transform::Trend;

const PLACEHOLDER: &str = "—";

/// Groups the integer digits of `value` with `,` and keeps `decimals` fraction digits
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.004 rounds to "0.00" and must not keep the sign
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match decimal_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `$` prefixed, grouped, whole currency units: `1234567.0` → `"$1,234,567"`
pub fn format_currency(value: f64) -> String {
    let body = format_number_with_decimals(value.abs(), 0);
    if value < 0.0 && body != "0" && body != PLACEHOLDER {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

/// Grouped integer without symbol: `4012` → `"4,012"`
pub fn format_count(value: u64) -> String {
    format_number_with_decimals(value as f64, 0)
}

/// Percentage value without the `%` sign (cards render it as a suffix)
pub fn format_percent(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Axis label in thousands of currency units: `12500.0` → `"$12.5k"`, `-2000.0` → `"-$2k"`
pub fn format_axis_thousands(value: f64) -> String {
    let thousands = format!("{:.1}", value.abs() / 1000.0);
    let thousands = thousands.strip_suffix(".0").unwrap_or(&thousands);
    if value < 0.0 && thousands != "0" {
        format!("-${thousands}k")
    } else {
        format!("${thousands}k")
    }
}

fn change_sign(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "+",
        Trend::Down => "-",
        Trend::Flat => "",
    }
}

/// Relative change badge: `+` for up, `-` for down, magnitude with one decimal
///
/// `(Trend::Up, 12.5)` → `"+12.5%"`
pub fn format_change(trend: Trend, change: f64) -> String {
    format!("{}{:.1}%", change_sign(trend), change.abs())
}

/// Change of a series that already is a percentage, in percentage points
///
/// `(Trend::Down, -1.0)` → `"-1.0 pp"`
pub fn format_change_points(trend: Trend, change: f64) -> String {
    format!("{}{:.1} pp", change_sign(trend), change.abs())
}
