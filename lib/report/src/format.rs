//! Display formatting for metric values.
//!
//! One formatter per [`DisplayClass`]: "4.2/5" for ratings, "87.3%" for
//! percentages, "1,234" for counts, "18.5" for plain ratios.

use schoolscope_model::DisplayClass;

/// Sentinel rendered for a metric that does not apply to a school
pub const NOT_APPLICABLE: &str = "N/A";

/// Format a metric value per its display class.
pub fn format_value(class: DisplayClass, value: f64) -> String {
    match class {
        DisplayClass::Rating => format!("{value:.1}/5"),
        DisplayClass::Percent => format!("{value:.1}%"),
        DisplayClass::Count => group_thousands(value.round() as i64),
        DisplayClass::Ratio => format!("{value:.1}"),
    }
}

/// Format an optional value, rendering `None` as the "N/A" sentinel.
pub fn format_optional(class: DisplayClass, value: Option<f64>) -> String {
    match value {
        Some(v) => format_value(class, v),
        None => NOT_APPLICABLE.to_string(),
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_format() {
        assert_eq!(format_value(DisplayClass::Rating, 4.234), "4.2/5");
        assert_eq!(format_value(DisplayClass::Rating, 5.0), "5.0/5");
    }

    #[test]
    fn test_percent_format() {
        assert_eq!(format_value(DisplayClass::Percent, 87.31), "87.3%");
        assert_eq!(format_value(DisplayClass::Percent, 100.0), "100.0%");
    }

    #[test]
    fn test_count_format_with_separators() {
        assert_eq!(format_value(DisplayClass::Count, 1234.0), "1,234");
        assert_eq!(format_value(DisplayClass::Count, 987.0), "987");
        assert_eq!(format_value(DisplayClass::Count, 1234567.0), "1,234,567");
        assert_eq!(format_value(DisplayClass::Count, 0.0), "0");
    }

    #[test]
    fn test_ratio_format() {
        assert_eq!(format_value(DisplayClass::Ratio, 18.52), "18.5");
    }

    #[test]
    fn test_none_renders_sentinel() {
        assert_eq!(format_optional(DisplayClass::Percent, None), "N/A");
        assert_eq!(format_optional(DisplayClass::Percent, Some(50.0)), "50.0%");
    }
}
