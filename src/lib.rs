//! task-intent - natural language task intent extraction
//!
//! This crate turns free-form task sentences such as
//! "next monday 3pm meeting, high priority" into structured fields: a
//! cleaned title, a due date/time, a priority and a category hint.
//!
//! ```no_run
//! let intent = task_intent::parse("tomorrow morning 9 go to the library");
//! assert_eq!(intent.content, "go to the library");
//! ```

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::IntentError;
pub use features::nlp::{parse, parse_at, IntentParser, KeywordTable, Locale, ParsedIntent};
