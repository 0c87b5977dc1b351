//! Date and time extraction.
//!
//! Resolution runs in three phases:
//!
//! 1. relative dates ("today", "next week friday", "thursday")
//! 2. absolute dates ("2026-03-05", "3月5日", "march 5", "3/5"), only when
//!    phase 1 found nothing
//! 3. time of day ("15:30", "3pm", "九点半", "evening"), always attempted on
//!    what phases 1 and 2 left behind
//!
//! Each phase is an ordered list of attempts; the first attempt that hits
//! wins. A date without a time gets 09:00, a time without a date gets today.

use std::ops::Range;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};

use crate::core::text::{is_isolated, remove_span};
use crate::core::{
    days_until_next_week, days_until_weekday, month_day_on_or_after, offset_days,
    weekday_from_iso, DateParseResult,
};
use crate::error::IntentError;

use super::keywords::{DayPeriod, KeywordTable};
use super::matcher::{alternation, Boundary, KeywordMatcher};

/// Numbers written as digits.
const DIGITS: &str = "[0-9]{1,2}";

/// Characters that may not touch the digits of a clock time.
const CLOCK_NEIGHBOURS: &[char] = &[':', '：'];

/// Characters that may not touch the digits of a numeric date.
const DATE_NEIGHBOURS: &[char] = &['-', '/'];

/// Today, tomorrow or the day after, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelativeDay {
    Today,
    Tomorrow,
    DayAfterTomorrow,
}

impl RelativeDay {
    const ORDER: [Self; 3] = [Self::Today, Self::Tomorrow, Self::DayAfterTomorrow];

    const fn offset(self) -> i64 {
        match self {
            Self::Today => 0,
            Self::Tomorrow => 1,
            Self::DayAfterTomorrow => 2,
        }
    }
}

/// A resolved date and the span of text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DateHit {
    date: NaiveDate,
    range: Range<usize>,
}

/// A resolved time of day and the spans of text it came from, in text order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TimeHit {
    time: NaiveTime,
    ranges: Vec<Range<usize>>,
}

type DateAttempt = fn(&DateTimeExtractor, &str, NaiveDate) -> Option<DateHit>;
type TimeAttempt = fn(&DateTimeExtractor, &str) -> Option<TimeHit>;

/// Result of date/time extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeMatch {
    /// Input with every recognised span removed.
    pub remaining: String,
    /// Resolved timestamp.
    pub due_at: Option<NaiveDateTime>,
    /// Recognised substrings joined by a space.
    pub matched_text: Option<String>,
}

/// Resolves dates and times of day and strips them from the text.
#[derive(Debug, Clone)]
pub struct DateTimeExtractor {
    relative_days: Option<KeywordMatcher<RelativeDay>>,
    next_week: Option<Regex>,
    weekday_names: Option<KeywordMatcher<u8>>,
    weekdays: Option<KeywordMatcher<u8>>,
    full_date: Regex,
    marker_date: Option<Regex>,
    month_name_date: Option<Regex>,
    months: Option<KeywordMatcher<u32>>,
    marked_months: Vec<String>,
    short_date: Regex,
    clock_time: Regex,
    spoken_time: Option<Regex>,
    periods: Option<KeywordMatcher<DayPeriod>>,
    meridiems: Option<KeywordMatcher<DayPeriod>>,
    numerals: Option<KeywordMatcher<u32>>,
    connector: Option<Regex>,
    time_connector: Option<Regex>,
}

impl DateTimeExtractor {
    /// Relative-date attempts, in order.
    const RELATIVE: [DateAttempt; 3] = [Self::relative_day, Self::next_week, Self::bare_weekday];

    /// Absolute-date attempts, in order.
    const ABSOLUTE: [DateAttempt; 3] = [Self::full_date, Self::localized_date, Self::short_date];

    /// Explicit time-of-day attempts, in order.
    const TIME: [TimeAttempt; 2] = [Self::clock_time, Self::spoken_time];

    /// Compile the date and time patterns of `table`.
    ///
    /// # Errors
    ///
    /// Returns `IntentError::Pattern` if a pattern cannot be compiled.
    pub fn new(table: &KeywordTable) -> Result<Self, IntentError> {
        let wb = table.word_boundaries;
        let whole = Boundary::for_table(wb, Boundary::Both);
        let suffix = Boundary::for_table(wb, Boundary::Trailing);

        let relative = &table.relative_days;
        let relative_days = KeywordMatcher::new(
            relative
                .today
                .iter()
                .map(|k| (k.as_str(), RelativeDay::Today))
                .chain(relative.tomorrow.iter().map(|k| (k.as_str(), RelativeDay::Tomorrow)))
                .chain(
                    relative
                        .day_after_tomorrow
                        .iter()
                        .map(|k| (k.as_str(), RelativeDay::DayAfterTomorrow)),
                ),
            whole,
        )?;

        let weekday_names = KeywordMatcher::new(
            table
                .weekdays
                .iter()
                .chain(&table.weekday_suffixes)
                .map(|w| (w.keyword.as_str(), w.weekday)),
            whole,
        )?;
        let weekdays = KeywordMatcher::new(
            table.weekdays.iter().map(|w| (w.keyword.as_str(), w.weekday)),
            whole,
        )?;

        let next_week = {
            let all_weekdays = alternation(
                table
                    .weekdays
                    .iter()
                    .chain(&table.weekday_suffixes)
                    .map(|w| w.keyword.as_str()),
                whole,
            );
            let full_weekdays = alternation(table.weekdays.iter().map(|w| w.keyword.as_str()), whole);

            let mut branches = Vec::new();
            if let Some(qualifier) = alternation(table.next_week.iter().map(String::as_str), whole) {
                match &all_weekdays {
                    Some(days) => branches.push(format!(r"{qualifier}(?:\s*(?P<weekday>{days}))?")),
                    None => branches.push(qualifier),
                }
            }
            if let (Some(prefix), Some(days)) = (
                alternation(table.next_prefix.iter().map(String::as_str), whole),
                &full_weekdays,
            ) {
                branches.push(format!(r"{prefix}\s*(?P<prefixed>{days})"));
            }

            if branches.is_empty() {
                None
            } else {
                Some(Regex::new(&format!("(?i)(?:{})", branches.join("|")))?)
            }
        };

        let numeral_words = alternation(table.numerals.iter().map(|n| n.word.as_str()), whole);
        let number = match &numeral_words {
            Some(words) => format!("(?:{DIGITS}|{words})"),
            None => DIGITS.to_string(),
        };
        let numerals = KeywordMatcher::new(
            table.numerals.iter().map(|n| (n.word.as_str(), n.value)),
            whole,
        )?;

        let markers = &table.date_markers;
        let year_marker = alternation(markers.year.iter().map(String::as_str), suffix);
        let month_marker = alternation(markers.month.iter().map(String::as_str), suffix);
        let day_markers = alternation(markers.day.iter().map(String::as_str), suffix);
        let day_marker = day_markers
            .as_ref()
            .map(|marker| format!("{marker}?"))
            .unwrap_or_default();

        let year_separator = year_marker.map_or_else(|| "[-/]".to_string(), |m| format!("(?:[-/]|{m})"));
        let month_separator = month_marker
            .as_ref()
            .map_or_else(|| "[-/]".to_string(), |m| format!("(?:[-/]|{m})"));
        let full_date = Regex::new(&format!(
            r"(?i)(?P<y>[0-9]{{4}})\s*{year_separator}\s*(?P<m>{DIGITS})\s*{month_separator}\s*(?P<d>{DIGITS}){day_marker}"
        ))?;

        let marker_date = month_marker
            .as_ref()
            .map(|m| {
                Regex::new(&format!(
                    r"(?i)(?P<m>{number})\s*{m}\s*(?P<d>{number}){day_marker}"
                ))
            })
            .transpose()?;

        let named_day_marker = day_markers
            .as_ref()
            .map(|marker| format!("(?P<dm>{marker})?"))
            .unwrap_or_default();
        let month_name_date = alternation(table.months.iter().map(|m| m.keyword.as_str()), whole)
            .map(|names| {
                Regex::new(&format!(
                    r"(?i)(?P<name>{names})\.?\s*(?P<d>{DIGITS}){named_day_marker}"
                ))
            })
            .transpose()?;
        let months = KeywordMatcher::new(
            table.months.iter().map(|m| (m.keyword.as_str(), m.month)),
            whole,
        )?;
        let marked_months = table
            .months
            .iter()
            .filter(|m| m.needs_day_marker)
            .map(|m| m.keyword.to_lowercase())
            .collect();

        let short_date = Regex::new(&format!(r"(?P<m>{DIGITS})[-/](?P<d>{DIGITS})"))?;

        let meridiem_keywords: Vec<_> = table
            .periods
            .iter()
            .filter(|p| p.period.is_meridiem())
            .collect();
        let period_keywords: Vec<_> = table
            .periods
            .iter()
            .filter(|p| !p.period.is_meridiem())
            .collect();

        let meridiem = alternation(meridiem_keywords.iter().map(|p| p.keyword.as_str()), suffix);
        let meridiem_suffix = meridiem
            .as_ref()
            .map(|m| format!(r"(?:\s*(?P<mer>{m}))?"))
            .unwrap_or_default();

        let clock_time = Regex::new(&format!(
            r"(?i)(?P<h>{DIGITS})[:：](?P<min>[0-9]{{2}}){meridiem_suffix}"
        ))?;

        let spoken_time = {
            let times = &table.time_markers;
            let period_prefix = alternation(period_keywords.iter().map(|p| p.keyword.as_str()), whole)
                .map(|p| format!(r"(?:(?P<pre>{p})\s*)?"))
                .unwrap_or_default();

            let after_marker = {
                let mut branches = Vec::new();
                if let Some(half) = alternation(times.half.iter().map(String::as_str), suffix) {
                    branches.push(format!(r"\s*(?P<half>{half})"));
                }
                match alternation(times.minute.iter().map(String::as_str), suffix) {
                    Some(minute) => {
                        branches.push(format!(r"(?P<min>{number})(?:\s*{minute})?"));
                        branches.push(format!(r"\s+(?P<min2>{number})\s*{minute}"));
                    },
                    None => branches.push(format!(r"(?P<min>{number})")),
                }
                format!("(?:{})?", branches.join("|"))
            };

            let hour_marker = alternation(times.hour.iter().map(String::as_str), suffix)
                .map(|h| format!(r"(?:\s*(?P<marker>{h}){after_marker})?"))
                .unwrap_or_default();

            if hour_marker.is_empty() && meridiem_suffix.is_empty() && period_prefix.is_empty() {
                None
            } else {
                Some(Regex::new(&format!(
                    r"(?i){period_prefix}(?P<h>{number}){hour_marker}{meridiem_suffix}"
                ))?)
            }
        };

        let periods = KeywordMatcher::new(
            period_keywords.iter().map(|p| (p.keyword.as_str(), p.period)),
            whole,
        )?;
        let meridiems = KeywordMatcher::new(
            meridiem_keywords.iter().map(|p| (p.keyword.as_str(), p.period)),
            suffix,
        )?;

        let connector = trailing_connector(&table.connectors, wb)?;
        let time_connector = trailing_connector(&table.time_connectors, wb)?;

        Ok(Self {
            relative_days,
            next_week,
            weekday_names,
            weekdays,
            full_date,
            marker_date,
            month_name_date,
            months,
            marked_months,
            short_date,
            clock_time,
            spoken_time,
            periods,
            meridiems,
            numerals,
            connector,
            time_connector,
        })
    }

    /// Resolve the date and time in `text` relative to `now` and strip them.
    #[must_use]
    pub fn extract(&self, text: &str, now: NaiveDateTime) -> DateTimeMatch {
        let today = now.date();
        let mut remaining = text.to_string();
        let mut matched = Vec::new();

        let date = self.resolve_date(&remaining, today);
        if let Some(hit) = &date {
            log::debug!("date {} from '{}'", hit.date, &remaining[hit.range.clone()]);
            matched.push(remaining[hit.range.clone()].to_string());
            remaining = self.strip(&remaining, std::slice::from_ref(&hit.range));
        }

        let time = self.resolve_time(&remaining);
        if let Some(hit) = &time {
            log::debug!("time {} from {:?}", hit.time.format("%H:%M"), hit.ranges);
            matched.extend(hit.ranges.iter().map(|r| remaining[r.clone()].to_string()));
            remaining = self.strip(&remaining, &hit.ranges);
        }

        let resolved = match (date, time) {
            (Some(date), Some(time)) => Some(DateParseResult::with_time(date.date, time.time)),
            (Some(date), None) => Some(DateParseResult::date_only(date.date)),
            (None, Some(time)) => Some(DateParseResult::with_time(today, time.time)),
            (None, None) => None,
        };

        DateTimeMatch {
            remaining,
            due_at: resolved.map(|r| r.to_datetime()),
            matched_text: if matched.is_empty() {
                None
            } else {
                Some(matched.join(" "))
            },
        }
    }

    fn resolve_date(&self, text: &str, today: NaiveDate) -> Option<DateHit> {
        Self::RELATIVE
            .iter()
            .chain(Self::ABSOLUTE.iter())
            .find_map(|attempt| attempt(self, text, today))
    }

    fn resolve_time(&self, text: &str) -> Option<TimeHit> {
        Self::TIME
            .iter()
            .find_map(|attempt| attempt(self, text))
            .or_else(|| self.coarse_period(text))
    }

    // ----- Phase 1: relative dates -----

    fn relative_day(&self, text: &str, today: NaiveDate) -> Option<DateHit> {
        let hits: Vec<_> = self.relative_days.as_ref()?.find_iter(text).collect();

        let hit = RelativeDay::ORDER
            .iter()
            .find_map(|day| hits.iter().find(|hit| hit.value == *day))?;

        Some(DateHit {
            date: offset_days(today, hit.value.offset())?,
            range: hit.range.clone(),
        })
    }

    fn next_week(&self, text: &str, today: NaiveDate) -> Option<DateHit> {
        let caps = self.next_week.as_ref()?.captures(text)?;
        let whole = caps.get(0)?;

        let weekday = caps
            .name("weekday")
            .or_else(|| caps.name("prefixed"))
            .and_then(|m| self.weekday_names.as_ref()?.lookup(m.as_str()))
            .unwrap_or(1);
        let target = weekday_from_iso(weekday)?;

        Some(DateHit {
            date: offset_days(today, days_until_next_week(today, target))?,
            range: whole.range(),
        })
    }

    fn bare_weekday(&self, text: &str, today: NaiveDate) -> Option<DateHit> {
        let hit = self.weekdays.as_ref()?.first(text)?;
        let target = weekday_from_iso(hit.value)?;

        Some(DateHit {
            date: offset_days(today, days_until_weekday(today, target))?,
            range: hit.range,
        })
    }

    // ----- Phase 2: absolute dates -----

    fn full_date(&self, text: &str, _today: NaiveDate) -> Option<DateHit> {
        self.full_date.captures_iter(text).find_map(|caps| {
            let range = span(&caps, "y", "d")?;
            if !is_isolated(text, &range, DATE_NEIGHBOURS) {
                return None;
            }
            let year = caps.name("y")?.as_str().parse().ok()?;
            let month = self.number(caps.name("m")?.as_str())?;
            let day = self.number(caps.name("d")?.as_str())?;

            let date = NaiveDate::from_ymd_opt(year, month, day);
            if date.is_none() {
                log::trace!("rejected date {year}-{month}-{day}");
            }

            Some(DateHit {
                date: date?,
                range: caps.get(0)?.range(),
            })
        })
    }

    fn localized_date(&self, text: &str, today: NaiveDate) -> Option<DateHit> {
        let by_marker = self.marker_date.as_ref().and_then(|regex| {
            regex.captures_iter(text).find_map(|caps| {
                let range = caps.get(0)?.range();
                if !is_isolated(text, &range, DATE_NEIGHBOURS) {
                    return None;
                }
                let month = self.number(caps.name("m")?.as_str())?;
                let day = self.number(caps.name("d")?.as_str())?;

                Some(DateHit {
                    date: month_day_on_or_after(today, month, day)?,
                    range,
                })
            })
        });

        by_marker.or_else(|| {
            let regex = self.month_name_date.as_ref()?;
            regex.captures_iter(text).find_map(|caps| {
                let range = caps.get(0)?.range();
                if !is_isolated(text, &range, DATE_NEIGHBOURS) {
                    return None;
                }
                let name = caps.name("name")?.as_str();
                if caps.name("dm").is_none() && self.marked_months.contains(&name.to_lowercase()) {
                    log::trace!("'{name}' without a day marker is not a month");
                    return None;
                }
                let month = self.months.as_ref()?.lookup(name)?;
                let day = caps.name("d")?.as_str().parse().ok()?;

                Some(DateHit {
                    date: month_day_on_or_after(today, month, day)?,
                    range,
                })
            })
        })
    }

    fn short_date(&self, text: &str, today: NaiveDate) -> Option<DateHit> {
        self.short_date.captures_iter(text).find_map(|caps| {
            let range = caps.get(0)?.range();
            if !is_isolated(text, &range, DATE_NEIGHBOURS) {
                return None;
            }
            let month = caps.name("m")?.as_str().parse().ok()?;
            let day = caps.name("d")?.as_str().parse().ok()?;

            Some(DateHit {
                date: month_day_on_or_after(today, month, day)?,
                range,
            })
        })
    }

    // ----- Phase 3: time of day -----

    fn clock_time(&self, text: &str) -> Option<TimeHit> {
        self.clock_time.captures_iter(text).find_map(|caps| {
            let digits = span(&caps, "h", "min")?;
            if !is_isolated(text, &digits, CLOCK_NEIGHBOURS) {
                return None;
            }
            let mut hour: u32 = caps.name("h")?.as_str().parse().ok()?;
            let minute: u32 = caps.name("min")?.as_str().parse().ok()?;

            let meridiem = caps
                .name("mer")
                .and_then(|m| self.meridiems.as_ref()?.lookup(m.as_str()));
            if meridiem.is_some() && (1..=12).contains(&hour) {
                hour = resolve_hour(hour, meridiem);
            }

            Some(TimeHit {
                time: NaiveTime::from_hms_opt(hour, minute, 0)?,
                ranges: vec![caps.get(0)?.range()],
            })
        })
    }

    fn spoken_time(&self, text: &str) -> Option<TimeHit> {
        self.spoken_time.as_ref()?.captures_iter(text).find_map(|caps| {
            let whole = caps.get(0)?.range();
            let hour_match = caps.name("h")?;

            if hour_match.as_str().bytes().all(|b| b.is_ascii_digit())
                && !is_isolated(text, &hour_match.range(), CLOCK_NEIGHBOURS)
            {
                return None;
            }

            let adjacent = caps
                .name("mer")
                .and_then(|m| self.meridiems.as_ref()?.lookup(m.as_str()))
                .or_else(|| {
                    caps.name("pre")
                        .and_then(|m| self.periods.as_ref()?.lookup(m.as_str()))
                });
            let anchored = adjacent.is_some()
                || caps.name("marker").is_some()
                || self
                    .time_connector
                    .as_ref()
                    .is_some_and(|regex| regex.is_match(&text[..whole.start]));
            if !anchored {
                log::trace!("ignoring bare number '{}'", hour_match.as_str());
                return None;
            }

            let hour = self.number(hour_match.as_str())?;
            let minute = if caps.name("half").is_some() {
                30
            } else {
                match caps.name("min").or_else(|| caps.name("min2")) {
                    Some(m) => self.number(m.as_str())?,
                    None => 0,
                }
            };
            if hour > 23 || minute > 59 {
                return None;
            }

            let mut ranges = vec![whole.clone()];
            let modifier = adjacent.or_else(|| {
                let hit = self
                    .periods
                    .as_ref()?
                    .find_iter(text)
                    .find(|hit| hit.range.end <= whole.start || hit.range.start >= whole.end)?;
                ranges.push(hit.range);
                Some(hit.value)
            });
            ranges.sort_by_key(|r| r.start);

            Some(TimeHit {
                time: NaiveTime::from_hms_opt(resolve_hour(hour, modifier), minute, 0)?,
                ranges,
            })
        })
    }

    fn coarse_period(&self, text: &str) -> Option<TimeHit> {
        self.periods.as_ref()?.find_iter(text).find_map(|hit| {
            Some(TimeHit {
                time: hit.value.default_time()?,
                ranges: vec![hit.range],
            })
        })
    }

    // ----- helpers -----

    /// Parse digits or a spelled-out numeral.
    fn number(&self, raw: &str) -> Option<u32> {
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            raw.parse().ok()
        } else {
            self.numerals.as_ref()?.lookup(raw)
        }
    }

    /// Start of a connector word directly in front of `start`, if any.
    fn connector_start(&self, text: &str, start: usize) -> Option<usize> {
        let caps = self.connector.as_ref()?.captures(&text[..start])?;
        caps.name("connector").map(|m| m.start())
    }

    /// Remove `ranges` (and any connector right before each) from `text`.
    fn strip(&self, text: &str, ranges: &[Range<usize>]) -> String {
        let mut ranges: Vec<Range<usize>> = ranges
            .iter()
            .map(|r| self.connector_start(text, r.start).unwrap_or(r.start)..r.end)
            .collect();
        ranges.sort_by_key(|r| std::cmp::Reverse(r.start));

        ranges
            .into_iter()
            .fold(text.to_string(), |acc, range| remove_span(&acc, range))
    }
}

/// Pattern for one of `words` at the very end of the text before a match.
fn trailing_connector(words: &[String], word_boundaries: bool) -> Result<Option<Regex>, IntentError> {
    let whole = Boundary::for_table(word_boundaries, Boundary::Both);
    let lead = if word_boundaries { r"(?:^|\s)" } else { "" };
    alternation(words.iter().map(String::as_str), whole)
        .map(|c| Regex::new(&format!(r"(?i){lead}(?P<connector>{c})\s*$")))
        .transpose()
        .map_err(IntentError::from)
}

/// Byte range from the start of group `first` to the end of group `last`.
fn span(caps: &Captures<'_>, first: &str, last: &str) -> Option<Range<usize>> {
    Some(caps.name(first)?.start()..caps.name(last)?.end())
}

/// Turn a 1-12 style hour into a 24-hour one using the nearest modifier.
///
/// Without any modifier, 1 to 7 is read as afternoon or evening: these are
/// rare as morning times in casual task text. 8 to 12 stay as they are.
fn resolve_hour(hour: u32, modifier: Option<DayPeriod>) -> u32 {
    if hour > 12 {
        return hour;
    }

    match modifier {
        Some(DayPeriod::Morning | DayPeriod::Am) => hour,
        Some(DayPeriod::Afternoon | DayPeriod::Evening | DayPeriod::Pm) => {
            if hour == 12 {
                12
            } else {
                hour + 12
            }
        },
        Some(DayPeriod::Noon) => 12,
        None if (1..=7).contains(&hour) => hour + 12,
        None => hour,
    }
}
