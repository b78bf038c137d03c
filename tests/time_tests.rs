use chrono::{DateTime, Duration, NaiveDate, Utc};
use ghpulse::util::time::{format_week_date, relative_time, relative_time_from};

#[test]
fn test_just_now() {
    let now = Utc::now();
    assert_eq!(relative_time(&now), "just now");
}

#[test]
fn test_seconds_ago() {
    let t = Utc::now() - Duration::seconds(30);
    assert_eq!(relative_time(&t), "just now");
}

#[test]
fn test_minutes_ago() {
    let t = Utc::now() - Duration::minutes(45);
    assert_eq!(relative_time(&t), "45m ago");
}

#[test]
fn test_hours_ago() {
    let t = Utc::now() - Duration::hours(23);
    assert_eq!(relative_time(&t), "23h ago");
}

#[test]
fn test_days_ago() {
    let t = Utc::now() - Duration::days(15);
    assert_eq!(relative_time(&t), "15d ago");
}

#[test]
fn test_months_ago() {
    let t = Utc::now() - Duration::days(200);
    assert_eq!(relative_time(&t), "6mo ago");
}

#[test]
fn test_years_ago() {
    let t = Utc::now() - Duration::days(1000);
    assert_eq!(relative_time(&t), "2y ago");
}

#[test]
fn test_future_timestamp() {
    let t = Utc::now() + Duration::hours(5);
    assert_eq!(relative_time(&t), "just now");
}

#[test]
fn test_fixed_now_boundaries() {
    let now: DateTime<Utc> = "2026-03-15T12:00:00Z".parse().unwrap();
    let at = |d: Duration| relative_time_from(&(now - d), now);

    assert_eq!(at(Duration::seconds(59)), "just now");
    assert_eq!(at(Duration::seconds(60)), "1m ago");
    assert_eq!(at(Duration::minutes(59)), "59m ago");
    assert_eq!(at(Duration::minutes(60)), "1h ago");
    assert_eq!(at(Duration::days(29)), "29d ago");
    assert_eq!(at(Duration::days(30)), "1mo ago");
    assert_eq!(at(Duration::days(364)), "12mo ago");
    assert_eq!(at(Duration::days(365)), "1y ago");
}

#[test]
fn test_format_week_date() {
    let d = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
    assert_eq!(format_week_date(d), "Jan 4, 2026");

    let d = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    assert_eq!(format_week_date(d), "Dec 31, 2025");
}
