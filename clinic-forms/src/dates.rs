//! Date-time fragments embedded in API messages.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use regex::Regex;

/// `YYYY-MM-DD HH:MM[:SS]`, with `/` allowed in the date and `T` in place of
/// the space.
static DATE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{4}[-/][0-9]{2}[-/][0-9]{2}[ T][0-9]{2}:[0-9]{2}(?::[0-9]{2})?")
        .expect("Invalid date-time regex")
});

/// Optional fraction and UTC offset right after a matched date-time.
static OFFSET_SUFFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\.[0-9]+)?(?:Z|([+-])([0-9]{2}):?([0-9]{2}))").expect("Invalid offset regex")
});

const DEADLINE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// First date-time found in `text`, exactly as written.
pub fn extract_date_string(text: &str) -> Option<&str> {
    DATE_TIME_PATTERN.find(text).map(|found| found.as_str())
}

/// Parse a lock deadline as sent by the login endpoint.
///
/// Accepts RFC 3339 timestamps and anything [`extract_date_string`] can find.
/// A UTC offset written right after the date-time, bare or inside text, is
/// applied so the result is always UTC; without one the wall-clock time is
/// returned as is.
pub fn parse_lock_deadline(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_utc());
    }

    let found = DATE_TIME_PATTERN.find(trimmed)?;
    let normalized = found.as_str().replace('/', "-").replacen('T', " ", 1);

    let naive = DEADLINE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())?;

    match offset_after(&trimmed[found.end()..]) {
        Some(offset) => offset
            .from_local_datetime(&naive)
            .single()
            .map(|at| at.naive_utc()),
        None => Some(naive),
    }
}

fn offset_after(rest: &str) -> Option<FixedOffset> {
    let captures = OFFSET_SUFFIX_PATTERN.captures(rest)?;
    let Some(sign) = captures.get(1) else {
        return FixedOffset::east_opt(0);
    };

    let hours: i32 = captures[2].parse().ok()?;
    let minutes: i32 = captures[3].parse().ok()?;
    let seconds = hours * 3600 + minutes * 60;

    if sign.as_str() == "-" {
        FixedOffset::west_opt(seconds)
    } else {
        FixedOffset::east_opt(seconds)
    }
}
