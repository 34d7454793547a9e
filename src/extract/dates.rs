//! Best-effort date normalization.
//!
//! Spreadsheet templates arrive with dates in whatever form the author typed:
//! a raw spreadsheet serial number, `2024.05.01`, `2024-5-1`, `20240501`, or
//! `05/01/2024`. `normalize_date` folds all of those into canonical
//! `YYYY-MM-DD`. It never fails: input that matches no known shape comes back
//! as an empty string, and callers treat that as "could not normalize".

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Days between spreadsheet serial day zero (1899-12-30) and the Unix epoch
const SERIAL_EPOCH_OFFSET_DAYS: f64 = 25569.0;

/// Serial numbers are only trusted inside this window (roughly 2009-2064).
/// Anything outside is more likely a price or a phone fragment than a date.
const SERIAL_MIN: f64 = 40000.0;
const SERIAL_MAX: f64 = 60000.0;

static YMD_DELIMITED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})[./\-](\d{1,2})[./\-](\d{1,2})").unwrap());

static YMD_COMPACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})$").unwrap());

static MDY_DELIMITED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})[/\-](\d{1,2})[/\-](\d{4})").unwrap());

/// Convert a raw date cell to `YYYY-MM-DD`, or an empty string when the text
/// matches none of the accepted shapes. Strategies are tried in order and the
/// first match wins:
///
/// 1. numeric text shorter than 10 chars inside the serial window, converted
///    as a spreadsheet day count (UTC calendar)
/// 2. `YYYY` `.`/`-`/`/` month `.`/`-`/`/` day, zero-padded
/// 3. exactly eight digits, split `YYYY`/`MM`/`DD`
/// 4. `MM/DD/YYYY` (also with `-`), reordered
///
/// Month and day text is padded but not range-checked; coercion here is
/// deliberately best-effort.
pub fn normalize_date(raw: &str) -> String {
    let text = raw.trim();
    if text.is_empty() {
        return String::new();
    }

    if text.len() < 10 {
        if let Ok(serial) = text.parse::<f64>() {
            if serial > SERIAL_MIN && serial < SERIAL_MAX {
                if let Some(date) = serial_to_date(serial) {
                    return date;
                }
            }
        }
    }

    if let Some(caps) = YMD_DELIMITED.captures(text) {
        return format!("{}-{:0>2}-{:0>2}", &caps[1], &caps[2], &caps[3]);
    }

    if let Some(caps) = YMD_COMPACT.captures(text) {
        return format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]);
    }

    if let Some(caps) = MDY_DELIMITED.captures(text) {
        return format!("{}-{:0>2}-{:0>2}", &caps[3], &caps[1], &caps[2]);
    }

    String::new()
}

fn serial_to_date(serial: f64) -> Option<String> {
    let unix_seconds = ((serial - SERIAL_EPOCH_OFFSET_DAYS) * 86400.0) as i64;
    let date = DateTime::<Utc>::from_timestamp(unix_seconds, 0)?;
    Some(date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_serial_known_value() {
        // Spreadsheet serial 44927 is 2023-01-01
        assert_eq!(normalize_date("44927"), "2023-01-01");
    }

    #[test]
    fn test_serial_round_trip_over_accepted_range() {
        // Converting a serial to a date and back must reproduce the serial;
        // an off-by-one epoch offset would shift every date by a day.
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let mut serial = 40001i64;
        while serial < 60000 {
            let formatted = normalize_date(&serial.to_string());
            let date = NaiveDate::parse_from_str(&formatted, "%Y-%m-%d").unwrap();
            let back = (date - epoch).num_days() + 25569;
            assert_eq!(back, serial, "serial {} round-tripped to {}", serial, back);
            serial += 997;
        }
    }

    #[test]
    fn test_serial_window_is_exclusive() {
        assert_eq!(normalize_date("40000"), "");
        assert_eq!(normalize_date("60000"), "");
        assert_eq!(normalize_date("39999"), "");
    }

    #[test]
    fn test_delimited_forms_are_equivalent() {
        assert_eq!(normalize_date("2024-03-05"), "2024-03-05");
        assert_eq!(normalize_date("2024.03.05"), "2024-03-05");
        assert_eq!(normalize_date("2024/3/5"), "2024-03-05");
    }

    #[test]
    fn test_compact_form() {
        assert_eq!(normalize_date("20240305"), "2024-03-05");
    }

    #[test]
    fn test_us_order_is_rearranged() {
        assert_eq!(normalize_date("03/05/2024"), "2024-03-05");
        assert_eq!(normalize_date("3-5-2024"), "2024-03-05");
    }

    #[test]
    fn test_unrecognized_input_is_empty() {
        assert_eq!(normalize_date("not a date"), "");
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("   "), "");
        // Ten digits: too long to be a serial, not a YYYYMMDD
        assert_eq!(normalize_date("4000000000"), "");
    }

    #[test]
    fn test_padding_without_validation() {
        // No range check on month/day; coercion stays best-effort
        assert_eq!(normalize_date("2024.13.40"), "2024-13-40");
    }

    #[test]
    fn test_surrounding_text_is_tolerated() {
        // The delimited patterns are unanchored, matching the source behavior
        assert_eq!(normalize_date("출발 2024.05.01 (수)"), "2024-05-01");
    }
}
