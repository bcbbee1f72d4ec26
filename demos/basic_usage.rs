//! Walkthrough of the datewise API.
//!
//! Usage:
//! ```bash
//! cargo run --example basic_usage
//! ```

use chrono::{Duration, Utc};
use datewise::{
    angle_between_hands, days_in_month, format_duration, format_relative, format_span,
    format_ymd, is_leap_year, next_weekday, parse_iso8601, parse_rfc2822,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging so the parsers' fallback decisions are visible
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message));
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply()?;

    // Example: Parse the two standard formats
    println!("Parsing dates...");
    let posted = parse_rfc2822("Tue, 26 Jan 2016 13:48:02 GMT")?;
    println!("Posted:  {}", posted);

    let updated = parse_iso8601("2016-01-19T16:07:37+00:00")?;
    println!("Updated: {}", updated);

    // Example: Date-only input anchors at midnight UTC (watch the debug line)
    let day = parse_iso8601("2016-02-29")?;
    println!(
        "Day:     {} (leap year: {})",
        format_ymd(day.date_naive()),
        is_leap_year(day)
    );

    // Example: Measure spans on the absolute timeline
    println!("\nMeasuring spans...");
    println!("Gap:     {}", format_span(updated, posted));
    println!("Auction: {}", format_duration(Duration::milliseconds(90_061_250)));

    // Example: Calendar questions
    println!("\nCalendar lookups...");
    println!("Feb 2016 has {:?} days", days_in_month(2016, 2));

    let now = Utc::now();
    let next_friday = next_weekday(now.date_naive(), chrono::Weekday::Fri);
    println!("Next Friday is {}", format_relative(next_friday));

    // Example: Clock-hand geometry
    println!("\nClock hands are {:.4} rad apart right now", angle_between_hands(now));

    Ok(())
}
