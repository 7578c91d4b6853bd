//! Relative-time formatting for listing output and rate-limit reports.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Format a timestamp relative to the current instant.
///
/// Past times read like "3 days ago", future times like
/// "20 minutes from now".
pub fn relative(t: DateTime<Utc>) -> String {
    relative_to(t, Utc::now())
}

/// Format `t` relative to an explicit reference instant.
pub fn relative_to(t: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(t).num_seconds();
    if delta.abs() < 2 {
        return "now".to_string();
    }
    let span = span(delta.abs());
    if delta > 0 {
        format!("{span} ago")
    } else {
        format!("{span} from now")
    }
}

/// Human-scale magnitude for a positive number of seconds.
fn span(secs: i64) -> String {
    match secs {
        s if s < MINUTE => format!("{s} seconds"),
        s if s < 2 * MINUTE => "1 minute".to_string(),
        s if s < HOUR => format!("{} minutes", s / MINUTE),
        s if s < 2 * HOUR => "1 hour".to_string(),
        s if s < DAY => format!("{} hours", s / HOUR),
        s if s < 2 * DAY => "1 day".to_string(),
        s if s < WEEK => format!("{} days", s / DAY),
        s if s < 2 * WEEK => "1 week".to_string(),
        s if s < MONTH => format!("{} weeks", s / WEEK),
        s if s < 2 * MONTH => "1 month".to_string(),
        s if s < YEAR => format!("{} months", s / MONTH),
        s if s < 2 * YEAR => "1 year".to_string(),
        s => format!("{} years", s / YEAR),
    }
}
