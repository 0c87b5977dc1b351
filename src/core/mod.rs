//! Core utilities for task-intent.
//!
//! Date arithmetic, text span handling and the clock abstraction shared by
//! the extractor and the command-line surface.

mod clock;
mod datetime;
pub mod text;

pub use clock::{Clock, FixedClock, SystemClock};
#[cfg(test)]
pub use clock::MockClock;
pub use datetime::{
    days_until_next_week, days_until_weekday, default_time, iso_to_surface_weekday,
    month_day_on_or_after, offset_days, parse_reference_time, weekday_from_iso, DateParseResult,
    DEFAULT_TIME,
};
