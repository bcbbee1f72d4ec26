use chrono::{Duration, FixedOffset, TimeZone, Utc};
use datewise::span::*;

#[test]
fn test_exact_hour() {
    let start = Utc.with_ymd_and_hms(2016, 1, 19, 10, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2016, 1, 19, 11, 0, 0).unwrap();
    assert_eq!(format_span(start, end), "01:00:00.000");
}

#[test]
fn test_zero_span() {
    let t = Utc.with_ymd_and_hms(2016, 1, 19, 10, 0, 0).unwrap();
    assert_eq!(format_span(t, t), "00:00:00.000");
}

#[test]
fn test_millisecond_fraction() {
    let start = Utc.with_ymd_and_hms(2016, 1, 19, 10, 0, 0).unwrap();
    let end = start + Duration::milliseconds(250);
    assert_eq!(format_span(start, end), "00:00:00.250");
}

#[test]
fn test_every_field_carries() {
    let start = Utc.with_ymd_and_hms(2016, 1, 19, 10, 0, 0).unwrap();
    let end = start + Duration::milliseconds(3_723_004); // 1h 2m 3s 4ms
    assert_eq!(format_span(start, end), "01:02:03.004");
}

#[test]
fn test_argument_order_does_not_matter() {
    let a = Utc.with_ymd_and_hms(2016, 1, 19, 10, 0, 0).unwrap();
    let b = a + Duration::milliseconds(3_723_004);
    assert_eq!(format_span(a, b), format_span(b, a));
}

#[test]
fn test_hours_field_is_uncapped() {
    let start = Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2016, 1, 6, 4, 30, 0).unwrap();
    assert_eq!(format_span(start, end), "124:30:00.000");
}

#[test]
fn test_mixed_offsets_measure_the_timeline() {
    let start = Utc.with_ymd_and_hms(2016, 1, 19, 10, 0, 0).unwrap();
    // 12:30 at +01:00 is 11:30 UTC
    let end = FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2016, 1, 19, 12, 30, 0)
        .unwrap();
    assert_eq!(format_span(start, end), "01:30:00.000");
}

#[test]
fn test_format_duration_drops_the_sign() {
    assert_eq!(format_duration(Duration::milliseconds(250)), "00:00:00.250");
    assert_eq!(format_duration(Duration::milliseconds(-250)), "00:00:00.250");
    assert_eq!(format_duration(Duration::zero()), "00:00:00.000");
}

#[test]
fn test_sub_second_components_stay_padded() {
    assert_eq!(format_duration(Duration::milliseconds(7)), "00:00:00.007");
    assert_eq!(format_duration(Duration::seconds(59)), "00:00:59.000");
    assert_eq!(format_duration(Duration::minutes(9)), "00:09:00.000");
}
