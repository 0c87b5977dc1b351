//! Keywords command implementation.

use crate::cli::args::KeywordsArgs;
use crate::error::IntentError;

use super::Context;

/// Print the effective keyword table as YAML.
///
/// # Errors
///
/// Returns an error if a custom table cannot be loaded or serialized.
pub fn keywords(ctx: &Context, args: &KeywordsArgs) -> Result<String, IntentError> {
    let settings = ctx.parser_settings(&args.parser)?;
    settings.keyword_table(&ctx.paths)?.to_yaml()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{OutputFormat, ParserArgs};
    use crate::config::{Config, Paths};
    use crate::features::nlp::{KeywordTable, Locale};
    use std::path::PathBuf;

    fn context() -> Context {
        Context {
            config: Config::default(),
            paths: Paths::with_root(PathBuf::from("/tmp/task-intent-test")),
            format: OutputFormat::Pretty,
        }
    }

    #[test]
    fn test_keywords_builtin_roundtrip() {
        let args = KeywordsArgs {
            parser: ParserArgs {
                locale: Some(Locale::Zh),
                keywords: None,
            },
        };
        let yaml = keywords(&context(), &args).unwrap();
        let table = KeywordTable::from_yaml_str(&yaml).unwrap();

        assert_eq!(table.locale, "zh");
        assert!(!table.word_boundaries);
    }

    #[test]
    fn test_keywords_missing_file() {
        let args = KeywordsArgs {
            parser: ParserArgs {
                locale: None,
                keywords: Some(PathBuf::from("/nonexistent/table.yaml")),
            },
        };
        assert!(matches!(
            keywords(&context(), &args),
            Err(IntentError::Config(_))
        ));
    }
}
