//! Output formatting for task-intent.
//!
//! This module renders parse results as colored text or JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::IntentError;
use crate::features::nlp::ParsedIntent;

pub use json::*;
pub use pretty::*;

/// Format one parse result based on output format
///
/// # Errors
///
/// Returns `IntentError::Json` if JSON serialization fails.
pub fn format_intent(
    input: &str,
    intent: &ParsedIntent,
    format: OutputFormat,
) -> Result<String, IntentError> {
    match format {
        OutputFormat::Pretty => Ok(format_intent_pretty(input, intent)),
        OutputFormat::Json => format_intent_json(input, intent),
    }
}

/// Format a batch of parse results based on output format
///
/// # Errors
///
/// Returns `IntentError::Json` if JSON serialization fails.
pub fn format_intents(
    results: &[(String, ParsedIntent)],
    format: OutputFormat,
) -> Result<String, IntentError> {
    match format {
        OutputFormat::Pretty => Ok(format_intents_pretty(results)),
        OutputFormat::Json => format_intents_json(results),
    }
}
