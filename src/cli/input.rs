//! Boundary validation: raw text from prompts or script lines becomes typed values
//! before anything reaches the budget store.

use crate::core::errors::{BudgetError, Result};

const WEEKDAYS: [(&str, &str); 7] = [
    ("monday", "mon"),
    ("tuesday", "tue"),
    ("wednesday", "wed"),
    ("thursday", "thu"),
    ("friday", "fri"),
    ("saturday", "sat"),
    ("sunday", "sun"),
];

/// Parses a price. Anything that is not a finite number is rejected.
pub fn parse_price(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(BudgetError::InvalidInput(format!(
            "`{}` is not a valid number",
            trimmed
        ))),
    }
}

/// Accepts full or three-letter English weekday names in any case and returns the
/// lowercase full name used as a ledger key.
pub fn parse_weekday(raw: &str) -> Result<&'static str> {
    let needle = raw.trim().to_lowercase();
    WEEKDAYS
        .iter()
        .find(|(full, short)| needle == *full || needle == *short)
        .map(|(full, _)| *full)
        .ok_or_else(|| BudgetError::InvalidInput(format!("`{}` is not a day of the week", raw.trim())))
}

/// Parses an ISO week number (1-53) into its ledger key.
pub fn parse_week(raw: &str) -> Result<String> {
    match raw.trim().parse::<u32>() {
        Ok(week @ 1..=53) => Ok(week.to_string()),
        _ => Err(BudgetError::InvalidInput(format!(
            "`{}` is not an ISO week number (1-53)",
            raw.trim()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_accept_plain_numbers() {
        assert_eq!(parse_price("4.5").unwrap(), 4.5);
        assert_eq!(parse_price(" 12 ").unwrap(), 12.0);
        assert_eq!(parse_price("-3").unwrap(), -3.0);
    }

    #[test]
    fn prices_reject_text_and_non_finite_values() {
        for raw in ["", "abc", "4,50", "inf", "NaN", "£4"] {
            assert!(
                matches!(parse_price(raw), Err(BudgetError::InvalidInput(_))),
                "expected `{raw}` to be rejected"
            );
        }
    }

    #[test]
    fn weekdays_accept_full_and_short_names() {
        assert_eq!(parse_weekday("Monday").unwrap(), "monday");
        assert_eq!(parse_weekday("FRI").unwrap(), "friday");
        assert!(parse_weekday("someday").is_err());
    }

    #[test]
    fn weeks_are_bounded() {
        assert_eq!(parse_week("9").unwrap(), "9");
        assert_eq!(parse_week("53").unwrap(), "53");
        assert!(parse_week("0").is_err());
        assert!(parse_week("54").is_err());
        assert!(parse_week("09x").is_err());
    }
}
