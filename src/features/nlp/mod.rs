//! Natural language task intent extraction.
//!
//! This module turns free-form task sentences like:
//! - "tomorrow morning 9 go to the library"
//! - "next monday 3pm meeting, high priority"
//! - "明天早上9点去图书馆"
//!
//! into a [`ParsedIntent`]. All locale knowledge lives in a [`KeywordTable`].

mod category;
mod datetime;
mod keywords;
mod matcher;
mod normalize;
mod parser;
mod priority;

pub use category::CategoryExtractor;
pub use datetime::{DateTimeExtractor, DateTimeMatch};
pub use keywords::{
    Category, CategoryKeywords, DateMarkers, DayPeriod, KeywordTable, Locale, MonthKeyword,
    NumeralKeyword, PeriodKeyword, Priority, PriorityKeywords, RelativeDayKeywords, TimeMarkers,
    WeekdayKeyword,
};
pub use normalize::ContentNormalizer;
pub use parser::{parse, parse_at, IntentParser, ParsedIntent};
pub use priority::PriorityExtractor;
