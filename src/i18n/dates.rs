//! Date parsing for ordering and locale-aware formatting for display.
//!
//! Content dates arrive as raw front-matter strings. They are parsed leniently
//! and never cause a failure: ordering treats an unusable date as the Unix
//! epoch, and display falls back to the raw text.

use crate::i18n::Language;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a content date (RFC 3339, naive date-time, or plain `YYYY-MM-DD`).
///
/// Naive values are taken as UTC. Returns `None` for blank or malformed input.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

/// Milliseconds since the epoch used to order content.
///
/// Missing or malformed dates sort as epoch zero.
pub fn ordering_timestamp(raw: Option<&str>) -> i64 {
    raw.and_then(parse_timestamp)
        .map(|datetime| datetime.timestamp_millis())
        .unwrap_or(0)
}

fn long_date_format(language: Language) -> &'static str {
    match language.code() {
        "zh" | "ja" => "%Y年%-m月%-d日",
        "ko" => "%Y년 %-m월 %-d일",
        "fr" => "%-d %B %Y",
        "de" => "%-d. %B %Y",
        _ => "%B %-d, %Y",
    }
}

/// Format a content date as a long, localized calendar date (in UTC).
///
/// Unparseable input is returned unchanged.
pub fn format_date(raw: &str, language: Language) -> String {
    match parse_timestamp(raw) {
        Some(datetime) => datetime
            .format_localized(long_date_format(language), language.config().locale)
            .to_string(),
        None => raw.to_string(),
    }
}
