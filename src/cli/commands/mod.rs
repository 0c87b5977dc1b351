//! Command implementations for task-intent.
//!
//! Every command returns the text to print; `main` does the printing.

mod batch;
mod completions;
mod keywords;
mod parse;

pub use batch::batch;
pub use completions::completions;
pub use keywords::keywords;
pub use parse::parse;

use chrono::NaiveDateTime;

use crate::cli::args::{OutputFormat, ParserArgs};
use crate::config::{Config, ParserConfig, Paths};
use crate::core::{parse_reference_time, Clock, SystemClock};
use crate::error::IntentError;

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration.
    pub config: Config,
    /// Config and keyword table locations.
    pub paths: Paths,
    /// Effective output format.
    pub format: OutputFormat,
}

impl Context {
    /// Parser settings from the config file with command-line overrides
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn parser_settings(&self, args: &ParserArgs) -> Result<ParserConfig, IntentError> {
        let mut settings = self.config.parser.clone();

        if let Some(locale) = args.locale {
            settings.locale = locale;
            settings.keywords_file = None;
        }
        if let Some(file) = &args.keywords {
            // Paths given on the command line are relative to the working
            // directory, not to the keywords directory.
            settings.keywords_file = Some(std::env::current_dir()?.join(file));
        }

        Ok(settings)
    }
}

/// Resolve the `--now` argument, falling back to `clock`.
///
/// # Errors
///
/// Returns `IntentError::InvalidArgument` if the value cannot be parsed.
pub fn reference_time(raw: Option<&str>, clock: &dyn Clock) -> Result<NaiveDateTime, IntentError> {
    match raw {
        Some(raw) => parse_reference_time(raw).ok_or_else(|| {
            IntentError::InvalidArgument(format!(
                "Invalid --now value '{raw}' (expected YYYY-MM-DD[THH:MM[:SS]])"
            ))
        }),
        None => Ok(clock.now()),
    }
}

/// Reference time from `--now` or the system clock.
fn now_from(raw: Option<&str>) -> Result<NaiveDateTime, IntentError> {
    reference_time(raw, &SystemClock)
}
