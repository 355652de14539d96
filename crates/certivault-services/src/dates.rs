//! Issue date parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse an issue date.
///
/// `YYYY-MM-DD` is the documented format. Slash-separated dates and full
/// timestamps (RFC 3339 or `YYYY-MM-DDTHH:MM:SS`) are also accepted, keeping
/// only the date part. Impossible calendar dates such as `2024-02-30` are
/// rejected.
pub fn parse_issue_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
    {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }

    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}
