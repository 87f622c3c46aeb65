use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Parses an explicit display date from a manifest line, `YYYY-MM-DD`.
pub fn parse_manifest_date(buf: &str) -> Result<NaiveDate, String> {
    match NaiveDate::parse_from_str(buf, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => Err(format!("Unable to parse date {}, expected YYYY-MM-DD", buf)),
    }
}

/// Formats a timestamp the way it appears under a post heading,
/// e.g. "January 2nd, 2006".
pub fn format_display_date(date_time: &NaiveDateTime) -> String {
    let day = date_time.day();
    format!(
        "{} {}{}, {}",
        date_time.format("%B"),
        day,
        ordinal_suffix(day),
        date_time.format("%Y")
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
