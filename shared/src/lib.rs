use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of digits accepted in the day field
pub const DAY_MAX_LEN: usize = 2;
/// Maximum number of digits accepted in the month field
pub const MONTH_MAX_LEN: usize = 2;
/// Maximum number of digits accepted in the year field
pub const YEAR_MAX_LEN: usize = 4;

/// The fixed day/month/year triple the gate checks input against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl TargetDate {
    /// The date that opens the gate
    pub const UNLOCK: TargetDate = TargetDate {
        day: 26,
        month: 6,
        year: 2005,
    };
}

/// The two ways an unlock attempt can fail
///
/// The UI renders both identically (generic banner plus shake); only the
/// console log distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum GateError {
    /// At least one field was empty after trimming; the comparison never ran
    #[error("a required field is empty")]
    EmptyField,
    /// All fields were present but the entered date is not the target date
    #[error("entered date does not match")]
    DateMismatch,
}

/// Map Arabic-Indic digits (U+0660..U+0669) to ASCII digits
///
/// Both glyph sets are accepted as equivalent input; everything else passes
/// through unchanged.
pub fn normalize_digits(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => {
                char::from_digit(c as u32 - 0x0660, 10).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

fn is_gate_digit(c: char) -> bool {
    c.is_ascii_digit() || ('\u{0660}'..='\u{0669}').contains(&c)
}

/// Clean a raw field value as the user types
///
/// Drops every character outside the digit set (ASCII or Arabic-Indic) and
/// truncates to `max_len` digits. Never signals an error; invalid characters
/// are silently discarded.
pub fn sanitize_field(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(|c| is_gate_digit(*c))
        .take(max_len)
        .collect()
}

fn parse_component(raw: &str) -> Option<u32> {
    normalize_digits(raw).parse().ok()
}

/// Validate the three field values against a target date
///
/// All three values are trimmed first; any value that is empty after trimming
/// yields [`GateError::EmptyField`] without evaluating the comparison.
/// Otherwise each value is parsed as an integer (leading zeros tolerated, so
/// "06" and "6" are the same month) and compared against the target.
/// Out-of-range values such as month "13" are an ordinary mismatch, not a
/// distinct validation failure.
pub fn check_date(
    day: &str,
    month: &str,
    year: &str,
    target: &TargetDate,
) -> Result<(), GateError> {
    let day = day.trim();
    let month = month.trim();
    let year = year.trim();

    if day.is_empty() || month.is_empty() || year.is_empty() {
        return Err(GateError::EmptyField);
    }

    match (
        parse_component(day),
        parse_component(month),
        parse_component(year),
    ) {
        (Some(d), Some(m), Some(y))
            if d == target.day && m == target.month && y == target.year =>
        {
            Ok(())
        }
        _ => Err(GateError::DateMismatch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_date_unlocks() {
        assert_eq!(check_date("26", "6", "2005", &TargetDate::UNLOCK), Ok(()));
    }

    #[test]
    fn test_leading_zeros_unlock() {
        assert_eq!(check_date("26", "06", "2005", &TargetDate::UNLOCK), Ok(()));
        assert_eq!(check_date("06", "06", "2005", &TargetDate { day: 6, month: 6, year: 2005 }), Ok(()));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(check_date(" 26 ", "6", " 2005", &TargetDate::UNLOCK), Ok(()));
    }

    #[test]
    fn test_arabic_indic_digits_unlock() {
        // "٢٦", "٠٦", "٢٠٠٥"
        assert_eq!(
            check_date("\u{0662}\u{0666}", "\u{0660}\u{0666}", "\u{0662}\u{0660}\u{0660}\u{0665}", &TargetDate::UNLOCK),
            Ok(())
        );
    }

    #[test]
    fn test_wrong_date_is_mismatch() {
        assert_eq!(
            check_date("31", "12", "1999", &TargetDate::UNLOCK),
            Err(GateError::DateMismatch)
        );
        // A single wrong field is enough
        assert_eq!(
            check_date("26", "6", "2006", &TargetDate::UNLOCK),
            Err(GateError::DateMismatch)
        );
    }

    #[test]
    fn test_out_of_range_is_mismatch_not_rejected_separately() {
        assert_eq!(
            check_date("26", "13", "2005", &TargetDate::UNLOCK),
            Err(GateError::DateMismatch)
        );
    }

    #[test]
    fn test_empty_field_short_circuits() {
        assert_eq!(
            check_date("", "6", "2005", &TargetDate::UNLOCK),
            Err(GateError::EmptyField)
        );
        assert_eq!(
            check_date("26", "   ", "2005", &TargetDate::UNLOCK),
            Err(GateError::EmptyField)
        );
        assert_eq!(check_date("", "", "", &TargetDate::UNLOCK), Err(GateError::EmptyField));
    }

    #[test]
    fn test_unparseable_field_is_mismatch() {
        // Sanitization normally prevents this, but the check stands alone
        assert_eq!(
            check_date("2x", "6", "2005", &TargetDate::UNLOCK),
            Err(GateError::DateMismatch)
        );
    }

    #[test]
    fn test_normalize_digits() {
        assert_eq!(normalize_digits("\u{0662}\u{0666}"), "26");
        assert_eq!(normalize_digits("26"), "26");
        assert_eq!(normalize_digits("a\u{0660}b"), "a0b");
    }

    #[test]
    fn test_sanitize_drops_non_digits() {
        assert_eq!(sanitize_field("2a6", DAY_MAX_LEN), "26");
        assert_eq!(sanitize_field("-1.", DAY_MAX_LEN), "1");
        assert_eq!(sanitize_field("abc", DAY_MAX_LEN), "");
    }

    #[test]
    fn test_sanitize_enforces_max_length() {
        assert_eq!(sanitize_field("123", DAY_MAX_LEN), "12");
        assert_eq!(sanitize_field("123", MONTH_MAX_LEN), "12");
        assert_eq!(sanitize_field("20055", YEAR_MAX_LEN), "2005");
        assert_eq!(sanitize_field("20", YEAR_MAX_LEN), "20");
    }

    #[test]
    fn test_sanitize_keeps_arabic_indic_digits() {
        // Arabic-Indic digits count toward the length limit like any digit
        assert_eq!(sanitize_field("\u{0662}\u{0666}\u{0664}", DAY_MAX_LEN), "\u{0662}\u{0666}");
        assert_eq!(sanitize_field("x\u{0662}y\u{0666}", DAY_MAX_LEN), "\u{0662}\u{0666}");
    }

    #[test]
    fn test_gate_error_display() {
        assert_eq!(GateError::EmptyField.to_string(), "a required field is empty");
        assert_eq!(GateError::DateMismatch.to_string(), "entered date does not match");
    }
}
