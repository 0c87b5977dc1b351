//! Task intent parser.
//!
//! Turns a sentence like "next monday 3pm meeting, high priority" into a
//! [`ParsedIntent`] by running the extractors in a fixed order:
//! priority, category, date/time, then title clean-up.

use chrono::{Datelike, NaiveDateTime};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::core::{iso_to_surface_weekday, Clock, SystemClock};
use crate::error::IntentError;

use super::category::CategoryExtractor;
use super::datetime::DateTimeExtractor;
use super::keywords::{Category, KeywordTable, Locale, Priority};
use super::normalize::ContentNormalizer;
use super::priority::PriorityExtractor;

/// Structured fields recovered from one input sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedIntent {
    /// The title left after every recognised keyword is removed.
    pub content: String,
    /// When the task is due, in local time.
    pub due_at: Option<NaiveDateTime>,
    /// Task priority.
    pub priority: Option<Priority>,
    /// Category suggested by the content.
    pub category_hint: Option<Category>,
    /// The date and time words that were recognised, space separated.
    pub matched_time_text: Option<String>,
}

impl ParsedIntent {
    /// Check if a due date/time was found.
    #[must_use]
    pub const fn has_schedule(&self) -> bool {
        self.due_at.is_some()
    }

    /// Get the due date as an ISO string.
    #[must_use]
    pub fn due_date_iso(&self) -> Option<String> {
        self.due_at.map(|dt| dt.format("%Y-%m-%d").to_string())
    }

    /// Get the due time as `HH:MM`.
    #[must_use]
    pub fn due_time_hm(&self) -> Option<String> {
        self.due_at.map(|dt| dt.format("%H:%M").to_string())
    }

    /// Weekday of the due date, Sunday = 1 ... Saturday = 7.
    #[must_use]
    pub fn due_weekday(&self) -> Option<u8> {
        let iso = self.due_at?.weekday().number_from_monday();
        iso_to_surface_weekday(u8::try_from(iso).ok()?)
    }
}

static ENGLISH_PARSER: Lazy<IntentParser> = Lazy::new(|| {
    IntentParser::new(KeywordTable::builtin(Locale::En))
        .unwrap_or_else(|e| panic!("Failed to compile English parser: {e}"))
});

static CHINESE_PARSER: Lazy<IntentParser> = Lazy::new(|| {
    IntentParser::new(KeywordTable::builtin(Locale::Zh))
        .unwrap_or_else(|e| panic!("Failed to compile Chinese parser: {e}"))
});

/// Extraction pipeline compiled from one keyword table.
#[derive(Debug, Clone)]
pub struct IntentParser {
    priority: PriorityExtractor,
    category: CategoryExtractor,
    datetime: DateTimeExtractor,
    normalizer: ContentNormalizer,
}

impl IntentParser {
    /// Compile a parser for `table`.
    ///
    /// # Errors
    ///
    /// Returns `IntentError::InvalidKeywords` if the table fails validation
    /// and `IntentError::Pattern` if its keywords cannot be compiled.
    pub fn new(table: &KeywordTable) -> Result<Self, IntentError> {
        table.validate()?;
        log::debug!("Compiling parser for locale '{}'", table.locale);

        Ok(Self {
            priority: PriorityExtractor::new(table)?,
            category: CategoryExtractor::new(table)?,
            datetime: DateTimeExtractor::new(table)?,
            normalizer: ContentNormalizer,
        })
    }

    /// The shared parser for a built-in locale.
    #[must_use]
    pub fn builtin(locale: Locale) -> &'static Self {
        match locale {
            Locale::En => &ENGLISH_PARSER,
            Locale::Zh => &CHINESE_PARSER,
        }
    }

    /// Parse `input`, resolving relative dates against `now`.
    #[must_use]
    pub fn parse_at(&self, input: &str, now: NaiveDateTime) -> ParsedIntent {
        if input.trim().is_empty() {
            return ParsedIntent::default();
        }
        log::trace!("parsing '{input}' at {now}");

        let (text, priority) = self.priority.extract(input);
        let (text, category_hint) = self.category.extract(&text);
        let found = self.datetime.extract(&text, now);
        let content = self.normalizer.title(input, &found.remaining);

        ParsedIntent {
            content,
            due_at: found.due_at,
            priority,
            category_hint,
            matched_time_text: found.matched_text,
        }
    }

    /// Parse `input` with "now" taken from `clock`.
    #[must_use]
    pub fn parse_with(&self, input: &str, clock: &dyn Clock) -> ParsedIntent {
        self.parse_at(input, clock.now())
    }
}

/// Parse `input` with the English table and the system clock.
#[must_use]
pub fn parse(input: &str) -> ParsedIntent {
    IntentParser::builtin(Locale::En).parse_with(input, &SystemClock)
}

/// Parse `input` with the English table, resolving against `now`.
#[must_use]
pub fn parse_at(input: &str, now: NaiveDateTime) -> ParsedIntent {
    IntentParser::builtin(Locale::En).parse_at(input, now)
}
