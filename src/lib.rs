//! Datewise - date and time helpers built on chrono
//!
//! This library provides a small set of standalone date/time utilities:
//! parsing the two standard textual date formats, calendar arithmetic,
//! fixed-width time-span rendering, and the classic clock-hand angle
//! computation. Everything operates on chrono types and nothing touches
//! the filesystem or the network.
//!
//! # Modules
//!
//! The library is organized into focused modules:
//!
//! * [`parse`] - RFC 2822 / ISO 8601 / plain-date string parsing
//! * [`format`] - Rendering dates for display, absolute and relative
//! * [`span`] - Fixed-width `HH:mm:ss.sss` time spans
//! * [`calendar`] - Leap years, month lengths, weekday stepping
//! * [`clock`] - Angle between analog clock hands

/// Calendar arithmetic: leap years, month lengths, weekday stepping
pub mod calendar;

/// Angle between the hands of an analog clock
pub mod clock;

/// Date formatting, absolute and relative
pub mod format;

/// Parsers for the standard textual date formats
pub mod parse;

/// Fixed-width time-span rendering
pub mod span;

// Re-export the whole API surface for convenient access
pub use calendar::{days_in_month, is_leap_year, next_weekday};
pub use clock::angle_between_hands;
pub use format::{format_relative, format_ymd, YMD_FORMAT};
pub use parse::{parse_iso8601, parse_rfc2822, parse_ymd, ParseDateError};
pub use span::{format_duration, format_span};
