//! Splits a date range into report buckets.
//!
//! Every walk is anchored on the range start: the n-th bucket is
//! `start + n * step`, never the previous bucket plus one step, so a start on
//! the 31st keeps landing on month ends instead of drifting to the 28th.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` range. `start >= end` is a valid, empty range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whole calendar months between start and end.
    pub fn months_spanned(&self) -> u32 {
        diff_in_months(self.start, self.end)
    }
}

/// Bucket size of an income/expense report. Net-worth sampling has its own
/// fixed day step, see [`weekly_samples`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Month,
    Year,
}

impl Granularity {
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Month => "Monthly",
            Granularity::Year => "Yearly",
        }
    }
}

/// One accounting period of an income/expense report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bucket {
    /// Month starting at `start`, keyed by its `YYYY-MM` label.
    Month { start: NaiveDate, label: String },
    /// Year starting at `start`.
    Year { start: NaiveDate, year: i32 },
}

impl Bucket {
    pub fn start(&self) -> NaiveDate {
        match self {
            Bucket::Month { start, .. } | Bucket::Year { start, .. } => *start,
        }
    }
}

/// Counts whole calendar months between two dates, in either order.
pub fn diff_in_months(a: NaiveDate, b: NaiveDate) -> u32 {
    let (from, to) = if a <= b { (a, b) } else { (b, a) };
    let mut months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Picks monthly or yearly buckets for an income/expense report.
///
/// Only the span of the range matters.
pub fn select_granularity(range: &DateRange, yearly_threshold_months: u32) -> Granularity {
    if range.months_spanned() > yearly_threshold_months {
        Granularity::Year
    } else {
        Granularity::Month
    }
}

pub fn month_label(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Sample dates for a net-worth series, `step_days` apart.
pub fn weekly_samples(range: &DateRange, step_days: u32) -> Vec<NaiveDate> {
    let start = range.start;
    walk(range, |n| {
        let offset = u64::from(step_days).checked_mul(u64::from(n))?;
        start.checked_add_days(Days::new(offset))
    })
}

pub fn monthly_buckets(range: &DateRange) -> Vec<Bucket> {
    let start = range.start;
    walk(range, |n| start.checked_add_months(Months::new(n)))
        .into_iter()
        .map(|date| Bucket::Month {
            start: date,
            label: month_label(date),
        })
        .collect()
}

pub fn yearly_buckets(range: &DateRange) -> Vec<Bucket> {
    let start = range.start;
    walk(range, |n| {
        start.checked_add_months(Months::new(n.checked_mul(12)?))
    })
    .into_iter()
    .map(|date| Bucket::Year {
        start: date,
        year: date.year(),
    })
    .collect()
}

/// Buckets for an income/expense report at the given granularity.
pub fn buckets(range: &DateRange, granularity: Granularity) -> Vec<Bucket> {
    match granularity {
        Granularity::Month => monthly_buckets(range),
        Granularity::Year => yearly_buckets(range),
    }
}

/// Emits `range.start` and every `nth(n)` date while it stays before `range.end`.
///
/// The walk stops as soon as a step fails to move strictly forward.
fn walk<F>(range: &DateRange, nth: F) -> Vec<NaiveDate>
where
    F: Fn(u32) -> Option<NaiveDate>,
{
    let mut dates = Vec::new();
    let mut cursor = range.start;
    let mut index: u32 = 0;
    while cursor < range.end {
        dates.push(cursor);
        index = match index.checked_add(1) {
            Some(next) => next,
            None => break,
        };
        match nth(index) {
            Some(next) if next > cursor => cursor = next,
            other => {
                tracing::warn!(
                    cursor = %cursor,
                    next = ?other,
                    "period cursor failed to advance; stopping walk"
                );
                break;
            }
        }
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monthly_buckets_cover_half_open_range() {
        let range = DateRange::new(date(2020, 1, 1), date(2020, 4, 1));
        let labels: Vec<String> = monthly_buckets(&range)
            .into_iter()
            .map(|bucket| match bucket {
                Bucket::Month { label, .. } => label,
                Bucket::Year { .. } => unreachable!(),
            })
            .collect();
        assert_eq!(labels, vec!["2020-01", "2020-02", "2020-03"]);
    }

    #[test]
    fn month_end_anchor_does_not_drift() {
        let range = DateRange::new(date(2021, 1, 31), date(2021, 5, 1));
        let starts: Vec<NaiveDate> = monthly_buckets(&range).iter().map(Bucket::start).collect();
        assert_eq!(
            starts,
            vec![
                date(2021, 1, 31),
                date(2021, 2, 28),
                date(2021, 3, 31),
                date(2021, 4, 30)
            ]
        );
    }

    #[test]
    fn yearly_buckets_step_one_year() {
        let range = DateRange::new(date(2019, 1, 1), date(2021, 1, 1));
        let years: Vec<i32> = yearly_buckets(&range)
            .into_iter()
            .map(|bucket| match bucket {
                Bucket::Year { year, .. } => year,
                Bucket::Month { .. } => unreachable!(),
            })
            .collect();
        assert_eq!(years, vec![2019, 2020]);
    }

    #[test]
    fn buckets_follow_the_requested_granularity() {
        let range = DateRange::new(date(2019, 7, 1), date(2021, 1, 1));
        let monthly = buckets(&range, Granularity::Month);
        assert_eq!(monthly.len(), 18);
        assert!(matches!(monthly[0], Bucket::Month { ref label, .. } if label == "2019-07"));

        let yearly = buckets(&range, Granularity::Year);
        assert_eq!(
            yearly,
            vec![
                Bucket::Year { start: date(2019, 7, 1), year: 2019 },
                Bucket::Year { start: date(2020, 7, 1), year: 2020 },
            ]
        );
    }

    #[test]
    fn weekly_samples_step_seven_days() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 22));
        assert_eq!(
            weekly_samples(&range, 7),
            vec![date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 15)]
        );
    }

    #[test]
    fn degenerate_ranges_produce_no_buckets() {
        let same = DateRange::new(date(2024, 3, 1), date(2024, 3, 1));
        let reversed = DateRange::new(date(2024, 3, 1), date(2023, 3, 1));
        for range in [same, reversed] {
            assert!(range.is_empty());
            assert!(weekly_samples(&range, 7).is_empty());
            assert!(monthly_buckets(&range).is_empty());
            assert!(yearly_buckets(&range).is_empty());
        }
    }

    #[test]
    fn zero_step_terminates_after_first_sample() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 2, 1));
        assert_eq!(weekly_samples(&range, 0), vec![date(2024, 1, 1)]);
    }

    #[test]
    fn walk_stops_at_calendar_limit() {
        let range = DateRange::new(NaiveDate::MAX - Days::new(3), NaiveDate::MAX);
        assert_eq!(weekly_samples(&range, 7).len(), 1);
    }

    #[test]
    fn diff_in_months_counts_whole_months() {
        assert_eq!(diff_in_months(date(2019, 1, 1), date(2021, 1, 1)), 24);
        assert_eq!(diff_in_months(date(2020, 1, 1), date(2021, 1, 1)), 12);
        assert_eq!(diff_in_months(date(2020, 1, 15), date(2020, 2, 14)), 0);
        assert_eq!(diff_in_months(date(2021, 1, 1), date(2019, 1, 1)), 24);
    }

    #[test]
    fn granularity_switches_after_twelve_months() {
        let year = DateRange::new(date(2020, 1, 1), date(2021, 1, 1));
        let longer = DateRange::new(date(2020, 1, 1), date(2021, 2, 1));
        assert_eq!(select_granularity(&year, 12), Granularity::Month);
        assert_eq!(select_granularity(&longer, 12), Granularity::Year);
    }
}
