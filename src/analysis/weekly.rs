use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::github::models::Issue;
use crate::util::time::format_week_date;

/// Buckets produced per analysis.
pub const WEEK_COUNT: usize = 10;

pub const DAYS_PER_WEEK: i64 = 7;

/// New-to-closed ratio of a week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Ratio {
    Finite(f64),
    /// Issues were opened but none closed.
    Infinite,
    /// No issues opened or closed.
    Undefined,
}

impl Ratio {
    pub fn from_counts(new_count: u32, closed_count: u32) -> Self {
        if closed_count > 0 {
            Ratio::Finite(f64::from(new_count) / f64::from(closed_count))
        } else if new_count > 0 {
            Ratio::Infinite
        } else {
            Ratio::Undefined
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Finite(v) => write!(f, "{:.2}", v),
            Ratio::Infinite => write!(f, "∞"),
            Ratio::Undefined => write!(f, "n/a"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBucket {
    pub index: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub new_count: u32,
    pub closed_count: u32,
    pub open_at_start: u32,
    pub closure_rate: f64,
    pub ratio: Ratio,
    pub label: String,
}

impl WeekBucket {
    fn new(index: usize, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            index,
            start,
            end,
            new_count: 0,
            closed_count: 0,
            open_at_start: 0,
            closure_rate: 0.0,
            ratio: Ratio::Undefined,
            label: format!(
                "Week {} ({} - {})",
                index + 1,
                format_week_date(start),
                format_week_date(end)
            ),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Applies the three per-week predicates to one issue. Each is
    /// evaluated on its own, so a long-lived issue counts as open at the
    /// start of every week it spans.
    fn record(&mut self, issue: &Issue) {
        let created = issue.created_at.date_naive();
        let closed = issue.closed_at.map(|t| t.date_naive());

        if self.contains(created) {
            self.new_count += 1;
        }
        if closed.is_some_and(|d| self.contains(d)) {
            self.closed_count += 1;
        }
        if created < self.start && closed.is_none_or(|d| d >= self.start) {
            self.open_at_start += 1;
        }
    }

    fn finish(&mut self) {
        self.closure_rate = closure_rate(self.closed_count, self.open_at_start, self.new_count);
        self.ratio = Ratio::from_counts(self.new_count, self.closed_count);
    }
}

/// First day of the oldest bucket.
pub fn window_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(WEEK_COUNT as i64 * DAYS_PER_WEEK)
}

/// Inclusive `(start, end)` dates of every bucket, oldest first.
pub fn week_windows(today: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    let first = window_start(today);
    (0..WEEK_COUNT as i64)
        .map(|i| {
            let start = first + Duration::days(i * DAYS_PER_WEEK);
            (start, start + Duration::days(DAYS_PER_WEEK - 1))
        })
        .collect()
}

/// Percentage of the issues in play during a week that were closed in it.
pub fn closure_rate(closed_count: u32, open_at_start: u32, new_count: u32) -> f64 {
    let in_play = open_at_start + new_count;
    if in_play == 0 {
        return 0.0;
    }
    f64::from(closed_count) / f64::from(in_play) * 100.0
}

pub fn aggregate_weeks(issues: &[Issue], today: NaiveDate) -> Vec<WeekBucket> {
    week_windows(today)
        .into_iter()
        .enumerate()
        .map(|(index, (start, end))| {
            let mut bucket = WeekBucket::new(index, start, end);
            for issue in issues {
                bucket.record(issue);
            }
            bucket.finish();
            bucket
        })
        .collect()
}

/// Mean of every bucket's closure rate, empty weeks included.
pub fn average_closure_rate(weeks: &[WeekBucket]) -> f64 {
    if weeks.is_empty() {
        return 0.0;
    }
    weeks.iter().map(|w| w.closure_rate).sum::<f64>() / weeks.len() as f64
}
