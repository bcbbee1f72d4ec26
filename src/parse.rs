//! Date string parsing
//!
//! This module turns the two standard textual date formats into chrono
//! values: RFC 2822 as used by email and HTTP headers, and ISO 8601 as
//! used by nearly everything else. Both parsers keep the offset written
//! in the input, so callers can still see which zone the sender meant.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use log::debug;

use crate::format::YMD_FORMAT;

/// Error returned when a string does not hold a recognizable date
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDateError {
    #[error("invalid RFC 2822 date: {input:?}")]
    Rfc2822 {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid ISO 8601 date: {input:?}")]
    Iso8601 {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parse an RFC 2822 date string
///
/// # Arguments
/// * `datetime_str` - Date string like `"Tue, 26 Jan 2016 13:48:02 GMT"`,
///   with a numeric offset or a zone name
///
/// # Returns
/// * `Result<DateTime<FixedOffset>, ParseDateError>` - The parsed instant,
///   or an error naming the offending input
pub fn parse_rfc2822(datetime_str: &str) -> Result<DateTime<FixedOffset>, ParseDateError> {
    DateTime::parse_from_rfc2822(datetime_str).map_err(|source| {
        debug!("RFC 2822 parse failed for {:?}: {}", datetime_str, source);
        ParseDateError::Rfc2822 {
            input: datetime_str.to_string(),
            source,
        }
    })
}

/// Parse an ISO 8601 date string
///
/// Accepts the common profiles in order of likelihood: a full RFC 3339
/// datetime with offset (`"2016-01-19T08:07:37Z"`), a datetime without an
/// offset (read as local time), and a plain calendar date (read as
/// midnight UTC).
///
/// # Arguments
/// * `datetime_str` - Date string in one of the ISO 8601 profiles above
///
/// # Returns
/// * `Result<DateTime<FixedOffset>, ParseDateError>` - The parsed instant,
///   or an error naming the offending input
pub fn parse_iso8601(datetime_str: &str) -> Result<DateTime<FixedOffset>, ParseDateError> {
    let source = match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => return Ok(dt),
        Err(e) => e,
    };

    // Offsetless datetimes mean local wall-clock time
    let naive_format = format!("{}T%H:%M:%S%.f", YMD_FORMAT);
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(datetime_str, &naive_format) {
        debug!("no offset in {:?}, reading it as local time", datetime_str);
        let local_dt = Local
            .from_local_datetime(&dt)
            .single()
            .unwrap_or_else(|| Local.from_utc_datetime(&dt));
        return Ok(local_dt.fixed_offset());
    }

    // Plain calendar dates anchor at midnight UTC
    if let Ok(date) = parse_ymd(datetime_str) {
        debug!("no time component in {:?}, using midnight UTC", datetime_str);
        let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        return Ok(midnight.fixed_offset());
    }

    debug!("ISO 8601 parse failed for {:?}: {}", datetime_str, source);
    Err(ParseDateError::Iso8601 {
        input: datetime_str.to_string(),
        source,
    })
}

/// Parse a date string in YYYY-MM-DD format to a `NaiveDate`
///
/// # Arguments
/// * `date_str` - Date string like "2023-12-25"
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - The parsed date or a parse error
pub fn parse_ymd(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, YMD_FORMAT)
}
