//! Time span formatting
//!
//! Renders the distance between two instants as `HH:mm:ss.sss`. The hours
//! field widens past two digits rather than rolling over into days, so a
//! span is always a single sortable string.

use chrono::{DateTime, Duration, TimeZone};

/// Format the absolute length of a duration as `HH:mm:ss.sss`
///
/// The sign is discarded, so a duration and its negation format the same.
pub fn format_duration(duration: Duration) -> String {
    let mut millis = duration.num_milliseconds().abs();

    let hours = millis / 3_600_000;
    millis %= 3_600_000;
    let minutes = millis / 60_000;
    millis %= 60_000;
    let seconds = millis / 1_000;
    millis %= 1_000;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

/// Format the span between two instants as `HH:mm:ss.sss`
///
/// The instants may carry different timezones; the span is measured on
/// the absolute timeline, and argument order does not matter.
pub fn format_span<Tz1, Tz2>(start: DateTime<Tz1>, end: DateTime<Tz2>) -> String
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    format_duration(end.signed_duration_since(start))
}
