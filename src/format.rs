//! Display formatting in Vietnamese conventions

use chrono::{DateTime, TimeZone};

/// Format an amount as Vietnamese dong, e.g. `1.234.567 ₫`.
/// Dong has no minor unit, so the amount is rounded to a whole number.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped} ₫")
    } else {
        format!("{grouped} ₫")
    }
}

/// `dd/mm/yyyy HH:MM`
pub fn format_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// `HH:MM`
pub fn format_clock<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M").to_string()
}

/// `HH:MM:SS`
pub fn format_clock_seconds<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0), "0 ₫");
        assert_eq!(format_currency(999.0), "999 ₫");
        assert_eq!(format_currency(1000.0), "1.000 ₫");
        assert_eq!(format_currency(1_234_567.0), "1.234.567 ₫");
        assert_eq!(format_currency(-45_000.4), "-45.000 ₫");
        assert_eq!(format_currency(12_499.6), "12.500 ₫");
    }

    #[test]
    fn test_datetime() {
        let dt = Utc.with_ymd_and_hms(2025, 6, 1, 6, 5, 9).unwrap();
        assert_eq!(format_datetime(&dt), "01/06/2025 06:05");
        assert_eq!(format_clock(&dt), "06:05");
        assert_eq!(format_clock_seconds(&dt), "06:05:09");
    }
}
