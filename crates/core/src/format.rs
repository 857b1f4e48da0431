//! Formatting of benchmark values and revision-to-revision changes

/// Relative change from `before` to `after`, e.g. `+12.5%` or `-3.0%`.
/// Undefined ratios (zero or missing baseline, vanished value) give `?`.
#[allow(clippy::float_cmp)]
pub fn relative_change(before: f64, after: f64) -> String {
    let v = after / before - 1.0;
    if v.is_nan() || v.is_infinite() || v == -1.0 {
        "?".to_string()
    } else if v > 0.0 {
        format!("+{:.1}%", 100.0 * v)
    } else {
        format!("{:.1}%", 100.0 * v)
    }
}

/// Inline style highlighting a change: red beyond +5%, green beyond -5%
#[allow(clippy::float_cmp)]
pub fn change_style(before: f64, after: f64) -> &'static str {
    let v = after / before - 1.0;
    if v.is_nan() || v.is_infinite() || v == -1.0 || v > 0.05 {
        "color:#e00;font-weight:bold"
    } else if v < -0.05 {
        "color:#0a0;font-weight:bold"
    } else {
        "color:#aaa"
    }
}

pub fn format_time(seconds: f64) -> String {
    format!("{:.2}s", seconds)
}

pub fn format_mem(megabytes: f64) -> String {
    format!("{:.0} MB", megabytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_change() {
        assert_eq!(relative_change(2.0, 2.25), "+12.5%");
        assert_eq!(relative_change(2.0, 1.94), "-3.0%");
        assert_eq!(relative_change(2.0, 2.0), "0.0%");
        assert_eq!(relative_change(0.0, 1.0), "?");
        assert_eq!(relative_change(0.0, 0.0), "?");
        assert_eq!(relative_change(3.0, 0.0), "?");
    }

    #[test]
    fn test_change_style() {
        assert_eq!(change_style(1.0, 1.2), "color:#e00;font-weight:bold");
        assert_eq!(change_style(1.0, 0.8), "color:#0a0;font-weight:bold");
        assert_eq!(change_style(1.0, 1.01), "color:#aaa");
        assert_eq!(change_style(0.0, 1.0), "color:#e00;font-weight:bold");
    }

    #[test]
    fn test_value_formats() {
        assert_eq!(format_time(3.14159), "3.14s");
        assert_eq!(format_mem(511.6), "512 MB");
    }
}
