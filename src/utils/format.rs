use chrono::{Datelike, NaiveDate, Weekday};

/// Display a canonical `YYYY-MM-DD` date in Korean long form, e.g.
/// `2024년 5월 1일 (수)`. Text that does not parse is returned unchanged.
pub fn display_date_korean(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!(
            "{}년 {}월 {}일 ({})",
            d.year(),
            d.month(),
            d.day(),
            weekday_korean(d.weekday())
        ),
        Err(_) => date.to_string(),
    }
}

fn weekday_korean(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    }
}

/// Normalize a phone number to dashed Korean grouping.
/// Handles mobile (`010-1234-5678`), Seoul (`02-1234-5678`) and other
/// area-code numbers; anything unrecognized is returned as-is.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        11 if digits.starts_with("01") => {
            format!("{}-{}-{}", &digits[0..3], &digits[3..7], &digits[7..11])
        }
        10 if digits.starts_with("02") => {
            format!("{}-{}-{}", &digits[0..2], &digits[2..6], &digits[6..10])
        }
        10 => format!("{}-{}-{}", &digits[0..3], &digits[3..6], &digits[6..10]),
        _ => phone.to_string(),
    }
}

/// Truncate a string to a maximum number of characters, adding ellipsis if
/// needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
