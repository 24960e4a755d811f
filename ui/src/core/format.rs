//! Formatting helpers for presenting chart values.

use crate::profiling::aggregate::Unit;

/// Abbreviated integer display for count axes: 950, 1.2k, 3.4m.
pub fn format_integer(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e9 {
        trim_decimal(value / 1e9, "b")
    } else if magnitude >= 1e6 {
        trim_decimal(value / 1e6, "m")
    } else if magnitude >= 1e3 {
        trim_decimal(value / 1e3, "k")
    } else {
        format!("{value:.0}")
    }
}

/// Duration display for millisecond values: 850ms, 1.25s, 2.1min.
pub fn format_duration(ms: f64) -> String {
    if !ms.is_finite() {
        return "—".to_string();
    }

    let magnitude = ms.abs();
    if magnitude < 1_000.0 {
        format!("{ms:.0}ms")
    } else if magnitude < 60_000.0 {
        format!("{:.2}s", ms / 1_000.0)
    } else {
        format!("{:.1}min", ms / 60_000.0)
    }
}

pub fn format_value(value: f64, unit: Unit) -> String {
    match unit {
        Unit::Integer => format_integer(value),
        Unit::Duration => format_duration(value),
    }
}

fn trim_decimal(scaled: f64, suffix: &str) -> String {
    let text = format!("{scaled:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text).to_string();
    format!("{text}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_abbreviate_by_magnitude() {
        assert_eq!(format_integer(0.0), "0");
        assert_eq!(format_integer(950.0), "950");
        assert_eq!(format_integer(1_234.0), "1.2k");
        assert_eq!(format_integer(2_000.0), "2k");
        assert_eq!(format_integer(3_400_000.0), "3.4m");
        assert_eq!(format_integer(1_200_000_000.0), "1.2b");
    }

    #[test]
    fn durations_step_through_units() {
        assert_eq!(format_duration(0.0), "0ms");
        assert_eq!(format_duration(850.0), "850ms");
        assert_eq!(format_duration(1_250.0), "1.25s");
        assert_eq!(format_duration(59_000.0), "59.00s");
        assert_eq!(format_duration(126_000.0), "2.1min");
    }

    #[test]
    fn non_finite_values_render_as_placeholder() {
        assert_eq!(format_integer(f64::NAN), "—");
        assert_eq!(format_duration(f64::INFINITY), "—");
    }

    #[test]
    fn value_dispatch_follows_unit() {
        assert_eq!(format_value(1_500.0, Unit::Integer), "1.5k");
        assert_eq!(format_value(1_500.0, Unit::Duration), "1.50s");
    }
}
