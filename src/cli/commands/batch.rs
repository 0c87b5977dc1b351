//! Batch command implementation.

use std::io::BufRead;

use crate::cli::args::BatchArgs;
use crate::error::IntentError;
use crate::output::format_intents;

use super::{now_from, Context};

/// Execute the batch command over `reader`, one sentence per line.
///
/// Every line is resolved against the same reference time.
///
/// # Errors
///
/// Returns an error if reading fails, the keyword table cannot be loaded,
/// or output formatting fails.
pub fn batch(ctx: &Context, args: &BatchArgs, reader: impl BufRead) -> Result<String, IntentError> {
    let parser = ctx.parser_settings(&args.parser)?.build_parser(&ctx.paths)?;
    let now = now_from(args.now.as_deref())?;

    let mut results = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let intent = parser.parse_at(&line, now);
        results.push((line, intent));
    }
    log::debug!("Parsed {} lines", results.len());

    format_intents(&results, ctx.format)
}
