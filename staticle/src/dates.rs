//! Bucketed timestamp formatting for comment display
//!
//! Two formatters share the absolute "Mon D, YYYY" tail but bucket
//! differently: the comment-card formatter rounds elapsed time up to
//! whole days, while the finer-grained relative formatter rounds down
//! and adds minute and hour buckets.

use chrono::{DateTime, Utc};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_DAY: i64 = 86_400;

/// Coarse date bucket shown on comment cards
///
/// Elapsed time is rounded up to whole days: anything up to and
/// including 24 hours reads "Yesterday", 2-6 days reads "N days ago",
/// and a week or more falls back to the absolute date.
pub fn format_comment_date(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - timestamp).num_seconds().abs();
    let days = (elapsed + SECS_PER_DAY - 1) / SECS_PER_DAY;

    if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else {
        absolute_date(timestamp)
    }
}

/// Finer-grained relative formatter for other display needs
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - timestamp).num_seconds().abs();
    let minutes = elapsed / SECS_PER_MINUTE;
    let hours = elapsed / SECS_PER_HOUR;
    let days = elapsed / SECS_PER_DAY;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days < 7 {
        format!("{} day{} ago", days, plural(days))
    } else {
        absolute_date(timestamp)
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

/// Absolute "Mon D, YYYY" form (en-US month abbreviation, unpadded day)
fn absolute_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}
