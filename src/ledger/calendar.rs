//! Week/day key derivation and money rounding shared by the store and the CLI.

use chrono::{Datelike, NaiveDate};

/// ISO week number of `date` as a string key, e.g. `"9"`. The year is deliberately
/// not part of the key, so the same week number in different years shares a bucket.
pub fn week_id(date: NaiveDate) -> String {
    date.iso_week().week().to_string()
}

/// Lowercase full weekday name, e.g. `"wednesday"`.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%A").to_string().to_lowercase()
}

/// Full month name, e.g. `"February"`.
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Canonical form of a caller-supplied day name.
pub fn normalize_day(day: &str) -> String {
    day.trim().to_lowercase()
}

/// Days remaining after `date` before the ISO week ends (Sunday yields 0).
pub fn days_left_in_week(date: NaiveDate) -> u32 {
    7 - date.weekday().number_from_monday()
}

/// Rounds to two decimal places. Negative zero is folded to zero.
pub fn round_currency(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn week_id_uses_iso_week_number() {
        // 2024-02-28 is the Wednesday of ISO week 9.
        assert_eq!(week_id(date(2024, 2, 28)), "9");
        // 2021-01-01 still belongs to ISO week 53 of 2020.
        assert_eq!(week_id(date(2021, 1, 1)), "53");
    }

    #[test]
    fn day_and_month_names() {
        assert_eq!(day_key(date(2024, 3, 1)), "friday");
        assert_eq!(month_name(date(2024, 3, 1)), "March");
    }

    #[test]
    fn days_left_counts_to_sunday() {
        assert_eq!(days_left_in_week(date(2024, 2, 26)), 6);
        assert_eq!(days_left_in_week(date(2024, 3, 3)), 0);
    }

    #[test]
    fn rounding_hides_float_noise() {
        assert_eq!(round_currency(0.1 + 0.2), 0.3);
        assert_eq!(round_currency(4.499), 4.5);
        assert_eq!(round_currency(-0.001), 0.0);
        assert!(round_currency(-0.001).is_sign_positive());
    }

    #[test]
    fn normalize_day_lowercases() {
        assert_eq!(normalize_day(" Monday "), "monday");
    }
}
