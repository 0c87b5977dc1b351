//! Date and time utilities shared by the extractor and the CLI.
//!
//! All arithmetic is done on naive local dates: the caller supplies "now" and
//! every relative expression is resolved against it.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Time of day assumed when a date is given without a time.
pub const DEFAULT_TIME: (u32, u32) = (9, 0);

/// A resolved date with an optional time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParseResult {
    /// The parsed date.
    pub date: NaiveDate,
    /// Optional time of day.
    pub time: Option<NaiveTime>,
}

impl DateParseResult {
    /// Create a new result with just a date.
    #[must_use]
    pub const fn date_only(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    /// Create a new result with date and time.
    #[must_use]
    pub const fn with_time(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time: Some(time),
        }
    }

    /// Convert to a datetime, using the time if available or [`DEFAULT_TIME`] otherwise.
    #[must_use]
    pub fn to_datetime(&self) -> NaiveDateTime {
        let time = self.time.unwrap_or_else(default_time);
        NaiveDateTime::new(self.date, time)
    }
}

/// The fallback time of day (09:00).
#[must_use]
pub fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_TIME.0, DEFAULT_TIME.1, 0).unwrap_or_default()
}

/// Map an ISO weekday number (Monday = 1 ... Sunday = 7) to a [`Weekday`].
#[must_use]
pub const fn weekday_from_iso(number: u8) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

/// Convert an ISO weekday number to the surface calendar numbering
/// (Sunday = 1 ... Saturday = 7).
#[must_use]
pub const fn iso_to_surface_weekday(number: u8) -> Option<u8> {
    match number {
        1..=6 => Some(number + 1),
        7 => Some(1),
        _ => None,
    }
}

/// Days from `today` to the nearest `target` that is today or later (0..=6).
#[must_use]
pub fn days_until_weekday(today: NaiveDate, target: Weekday) -> i64 {
    let delta = i64::from(target.number_from_monday()) - i64::from(today.weekday().number_from_monday());
    if delta < 0 {
        delta + 7
    } else {
        delta
    }
}

/// Days from `today` to `target` in the following week: the smallest offset
/// of at least seven days that lands on `target` (7..=13).
#[must_use]
pub fn days_until_next_week(today: NaiveDate, target: Weekday) -> i64 {
    let mut days = i64::from(target.number_from_monday()) - i64::from(today.weekday().number_from_monday());
    while days < 7 {
        days += 7;
    }
    days
}

/// Shift `today` by a number of days.
#[must_use]
pub fn offset_days(today: NaiveDate, days: i64) -> Option<NaiveDate> {
    today.checked_add_signed(Duration::days(days))
}

/// Resolve a month/day pair without a year.
///
/// Uses the current year, or next year if that date is already behind `today`.
#[must_use]
pub fn month_day_on_or_after(today: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    let year = today.year();
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    if date < today {
        return NaiveDate::from_ymd_opt(year + 1, month, day);
    }

    Some(date)
}

/// Parse a reference timestamp such as `2026-10-16T08:30`, `2026-10-16 08:30`
/// or a bare `2026-10-16` (midnight).
#[must_use]
pub fn parse_reference_time(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(|date| NaiveDateTime::new(date, NaiveTime::default()))
}
