// ── Stat value formatting ──

use crate::derive::round_to;
use crate::model::{NetworkStat, StatFormat, StatValue};

/// Render a stat value for display.
///
/// Text values are shown verbatim. Numbers follow the stat's format:
/// `decimal` keeps one decimal below 10 and none otherwise, `percentage`
/// keeps two, and `number` (or no format) groups thousands with commas
/// from 1000 up. Rounding is half away from zero.
pub fn format_stat_value(stat: &NetworkStat) -> String {
    let value = match &stat.value {
        StatValue::Text(text) => return text.clone(),
        StatValue::Number(value) => *value,
    };

    match stat.format {
        Some(StatFormat::Decimal) if value < 10.0 => format!("{:.1}", round_to(value, 1)),
        Some(StatFormat::Decimal) => format!("{:.0}", value.round()),
        Some(StatFormat::Percentage) => format!("{:.2}", round_to(value, 2)),
        Some(StatFormat::Number) | None => format_number(value),
    }
}

/// Shortest plain rendering below 1000. From 1000 up, comma-grouped with
/// at most three decimals.
pub fn format_number(value: f64) -> String {
    if value < 1000.0 || value.is_nan() {
        return value.to_string();
    }

    let plain = round_to(value, 3).to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatCategory;

    fn stat(value: impl Into<StatValue>, format: Option<StatFormat>) -> NetworkStat {
        NetworkStat {
            id: "x".into(),
            label: "X".into(),
            value: value.into(),
            unit: String::new(),
            trend: None,
            trend_value: None,
            format,
            category: StatCategory::Traffic,
        }
    }

    fn render(value: impl Into<StatValue>, format: Option<StatFormat>) -> String {
        format_stat_value(&stat(value, format))
    }

    #[test]
    fn decimal_precision_depends_on_magnitude() {
        assert_eq!(render(124.5, Some(StatFormat::Decimal)), "125");
        assert_eq!(render(0.4, Some(StatFormat::Decimal)), "0.4");
        assert_eq!(render(2.5, Some(StatFormat::Decimal)), "2.5");
        assert_eq!(render(98.7, Some(StatFormat::Decimal)), "99");
    }

    #[test]
    fn negative_decimals_keep_one_place() {
        assert_eq!(render(-20.0, Some(StatFormat::Decimal)), "-20.0");
        assert_eq!(render(-0.25, Some(StatFormat::Decimal)), "-0.3");
    }

    #[test]
    fn percentage_keeps_two_decimals() {
        assert_eq!(render(99.99, Some(StatFormat::Percentage)), "99.99");
        assert_eq!(render(5.0, Some(StatFormat::Percentage)), "5.00");
    }

    #[test]
    fn numbers_are_grouped_from_one_thousand() {
        assert_eq!(render(12847.0, Some(StatFormat::Number)), "12,847");
        assert_eq!(render(892_345.0, None), "892,345");
        assert_eq!(render(1000.0, None), "1,000");
        assert_eq!(render(450.0, Some(StatFormat::Number)), "450");
        assert_eq!(format_number(1_234_567.125_4), "1,234,567.125");
    }

    #[test]
    fn small_numbers_keep_full_precision() {
        assert_eq!(render(450.123_456, None), "450.123456");
        assert_eq!(render(0.001, Some(StatFormat::Number)), "0.001");
        assert_eq!(format_number(-1_234_567.5), "-1234567.5");
    }

    #[test]
    fn text_is_verbatim() {
        assert_eq!(render("10,000+", Some(StatFormat::Number)), "10,000+");
    }
}
