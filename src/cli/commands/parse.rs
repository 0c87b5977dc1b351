//! Parse command implementation.
//!
//! This module implements `task-intent parse` for a single sentence.

use crate::cli::args::ParseArgs;
use crate::error::IntentError;
use crate::output::format_intent;

use super::{now_from, Context};

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if the keyword table cannot be loaded, `--now` is
/// invalid, or output formatting fails.
pub fn parse(ctx: &Context, args: &ParseArgs) -> Result<String, IntentError> {
    let parser = ctx.parser_settings(&args.parser)?.build_parser(&ctx.paths)?;
    let now = now_from(args.now.as_deref())?;

    let input = args.text.join(" ");
    let intent = parser.parse_at(&input, now);

    format_intent(&input, &intent, ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{OutputFormat, ParserArgs};
    use crate::config::{Config, Paths};
    use crate::features::nlp::Locale;
    use std::path::PathBuf;

    fn context() -> Context {
        Context {
            config: Config::default(),
            paths: Paths::with_root(PathBuf::from("/tmp/task-intent-test")),
            format: OutputFormat::Json,
        }
    }

    fn args(text: &str, locale: Option<Locale>) -> ParseArgs {
        ParseArgs {
            text: text.split(' ').map(String::from).collect(),
            now: Some("2026-10-16T08:00".to_string()),
            parser: ParserArgs {
                locale,
                keywords: None,
            },
        }
    }

    #[test]
    fn test_parse_json() {
        let output = parse(&context(), &args("tomorrow morning 9 go to the library", None)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["content"], "go to the library");
        assert_eq!(value["due_at"], "2026-10-17T09:00:00");
        assert_eq!(value["category_hint"], "study");
    }

    #[test]
    fn test_parse_chinese_locale() {
        let output = parse(&context(), &args("明天早上9点去图书馆", Some(Locale::Zh))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["content"], "去图书馆");
        assert_eq!(value["due_time"], "09:00");
    }

    #[test]
    fn test_parse_invalid_now() {
        let mut parse_args = args("buy milk", None);
        parse_args.now = Some("soon".to_string());

        assert!(matches!(
            parse(&context(), &parse_args),
            Err(IntentError::InvalidArgument(_))
        ));
    }
}
