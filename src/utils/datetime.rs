//! Date and time utility functions
//!
//! Due dates arrive as milliseconds since the epoch. This module turns them
//! into the short relative labels shown in the task table.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::constants::{DUE_DATE_FORMAT, OVERDUE_PREFIX};

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Format a millisecond timestamp as a local `YYYY-MM-DD HH:MM` string.
///
/// # Returns
/// * `String` - Local date-time, or the raw number if it is out of range
pub fn format_absolute(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(dt) => dt.format(DUE_DATE_FORMAT).to_string(),
        None => timestamp_ms.to_string(),
    }
}

/// Classify a due date relative to `now`.
///
/// * absent → empty string
/// * in the past → `OVERDUE: YYYY-MM-DD HH:MM`
/// * less than 48 hours ahead → `in N hours`
/// * less than 10 days ahead → `in N days`
/// * further out → `YYYY-MM-DD HH:MM`
pub fn format_due_date_at<Tz: TimeZone>(due_ms: Option<i64>, now: &DateTime<Tz>) -> String {
    let Some(due) = due_ms else {
        return String::new();
    };

    let diff = due.saturating_sub(now.timestamp_millis());

    if diff < 0 {
        format!("{}{}", OVERDUE_PREFIX, format_absolute(due))
    } else if diff < 48 * HOUR_MS {
        format!("in {} hours", rounded_div(diff, HOUR_MS))
    } else if diff < 10 * DAY_MS {
        format!("in {} days", rounded_div(diff, DAY_MS))
    } else {
        format_absolute(due)
    }
}

/// [`format_due_date_at`] against the current time.
pub fn format_due_date(due_ms: Option<i64>) -> String {
    format_due_date_at(due_ms, &Utc::now())
}

/// `value / unit` rounded half up, for non-negative `value`.
fn rounded_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}
