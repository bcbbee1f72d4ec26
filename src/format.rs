//! Date formatting functions
//!
//! This module renders dates for display, from the plain `YYYY-MM-DD` form
//! the parsers understand to relative wording ("yesterday", "today",
//! "tomorrow") measured against the current local date.

use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Standard calendar-date format shared by the parsing and formatting helpers
pub const YMD_FORMAT: &str = "%Y-%m-%d";

/// Format a `NaiveDate` to a YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(YMD_FORMAT).to_string()
}

/// Format a date relative to the current local date
///
/// # Arguments
/// * `date` - The calendar date to describe
///
/// # Returns
/// * `String` - "yesterday"/"today"/"tomorrow" for the adjacent days,
///   "next Monday"/"last Friday" within a week, "in N days"/"N days ago"
///   within a month, and "Jan 15" (or "Jan 15, 2025" across years) beyond
pub fn format_relative(date: NaiveDate) -> String {
    let today = Local::now().date_naive();

    // Calculate the difference in days
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => {
            // Within the next week - show day name
            format!("next {}", weekday_name(date.weekday()))
        }
        diff if (-7..-1).contains(&diff) => {
            // Within the past week - show day name
            format!("last {}", weekday_name(date.weekday()))
        }
        diff if diff > 7 && diff <= 30 => {
            // Within the next month - show "in X days"
            format!("in {} days", diff)
        }
        diff if (-30..-7).contains(&diff) => {
            // Within the past month - show "X days ago"
            format!("{} days ago", -diff)
        }
        _ => {
            // For dates further out, show the actual date
            // Format as "Jan 15" or "Jan 15, 2025" if different year
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
