//! Calendar arithmetic
//!
//! Leap-year and month-length questions answered by the proleptic
//! Gregorian calendar chrono implements, plus weekday stepping.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Report whether the year of `date` is a Gregorian leap year
///
/// Answered by asking the calendar itself: the year is a leap year
/// exactly when February 29 of that year exists.
#[must_use]
pub fn is_leap_year(date: impl Datelike) -> bool {
    NaiveDate::from_ymd_opt(date.year(), 2, 29).is_some()
}

/// Number of days in the given month, or `None` if the month is not 1-12
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
        _ => first.with_month(month + 1)?,
    };
    Some(next.pred_opt()?.day())
}

/// Next occurrence of `target` weekday strictly after `from` (1 to 7 days ahead)
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let from_w = from.weekday().num_days_from_monday() as i64;
    let tgt_w = target.num_days_from_monday() as i64;
    let mut delta = (7 + tgt_w - from_w) % 7;
    if delta == 0 {
        delta = 7; // same weekday means next week
    }
    from + Duration::days(delta)
}
