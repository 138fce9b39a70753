use std::fmt::Display;

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use clap::ValueEnum;

/// Which history a period view reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum Period {
    #[default]
    Day,
    Week,
    Month,
    Year,
    All,
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::All => "all",
        })
    }
}

/// Bucket keys of one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PeriodKeys {
    pub day: String,
    pub week: String,
    pub month: String,
    pub year: String,
}

impl PeriodKeys {
    pub(crate) fn of<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self {
            day: day_key(at),
            week: week_key(at),
            month: month_key(at),
            year: year_key(at),
        }
    }
}

/// `YYYY-MM-DD` of the UTC date.
pub(crate) fn day_key<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    at.with_timezone(&Utc).format("%Y-%m-%d").to_string()
}

/// ISO-8601 week `YYYY-Www` in the instant's own calendar.
///
/// The date is moved to the Thursday of its Monday-based week; that
/// Thursday's year is the ISO year and its day-of-year gives the week.
pub(crate) fn week_key<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    let date = at.date_naive();
    let weekday = i64::from(date.weekday().number_from_monday());
    let thursday = date + Duration::days(4 - weekday);
    let week = thursday.ordinal0() / 7 + 1;
    format!("{}-W{:02}", thursday.year(), week)
}

/// `YYYY-MM` in the instant's own calendar.
pub(crate) fn month_key<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!("{}-{:02}", at.year(), at.month())
}

/// `YYYY` in the instant's own calendar.
pub(crate) fn year_key<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    at.year().to_string()
}
