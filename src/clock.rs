//! Clock-hand geometry
//!
//! Computes the angle between the hour and minute hands of an analog
//! clock showing a given instant.

use chrono::{DateTime, TimeZone, Timelike, Utc};

/// Angle in radians between the hour and minute hands at `instant`
///
/// Always the shorter arc, so the result lies in `[0, pi]`. The hour hand
/// is read from the UTC clock face while the minute hand is read in the
/// instant's own offset; the same instant viewed through different offsets
/// can therefore yield different angles.
///
/// # Arguments
/// * `instant` - The time shown on the clock
///
/// # Returns
/// * `f64` - Radians between the hands, from 0.0 (overlapping) to pi (opposite)
#[must_use]
pub fn angle_between_hands<Tz: TimeZone>(instant: DateTime<Tz>) -> f64 {
    let minute = f64::from(instant.minute());
    let mut hour = f64::from(instant.with_timezone(&Utc).hour());
    if hour > 12.0 {
        hour -= 12.0;
    }

    // Hour hand moves 30 degrees per hour, minute hand 6 degrees per minute
    let mut degrees = (30.0 * hour - 5.5 * minute).abs();
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }

    degrees / 180.0 * std::f64::consts::PI
}
