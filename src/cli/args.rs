use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::features::nlp::Locale;

#[derive(Parser)]
#[command(name = "task-intent")]
#[command(about = "Extract due dates, priorities and categories from task sentences")]
#[command(long_about = "task-intent - natural language task intent extraction

Turns a free-form task sentence into a cleaned title, an optional due
date/time, an optional priority and an optional category hint.

QUICK START:
  task-intent parse \"tomorrow morning 9 go to the library\"
  task-intent parse \"next monday 3pm meeting, high priority\"
  task-intent parse --locale zh \"明天早上9点去图书馆\"
  cat todo.txt | task-intent batch --output json

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  task-intent <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the config file
    #[arg(long, global = true, env = "TASK_INTENT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one task sentence
    ///
    /// Extracts the priority, category hint, due date/time and cleaned
    /// title from the given text.
    ///
    /// # Examples
    ///
    ///   task-intent parse "tomorrow morning 9 go to the library"
    ///   task-intent parse "call mom at 5, urgent"
    ///   task-intent parse --now 2026-10-16T08:00 "friday review"
    ///
    /// # Supported Patterns
    ///
    ///   Dates:      today, tomorrow, day after tomorrow, friday,
    ///               next week, next monday, 2026-03-05, march 5, 3/5
    ///   Times:      15:30, 3pm, 9 o'clock, at 5, morning 9, evening
    ///   Priority:   !!!, !!, !, urgent, important, not urgent, low priority
    ///   Categories: work, life, study, health, goals (by keyword)
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Parse task sentences from stdin, one per line
    ///
    /// Blank lines are skipped. With --output json each result is printed
    /// as one compact JSON object per line.
    Batch(BatchArgs),

    /// Print the effective keyword table as YAML
    ///
    /// Useful as a starting point for a custom table: save the output,
    /// edit it, and point `parser.keywords_file` (or --keywords) at it.
    Keywords(KeywordsArgs),

    /// Generate shell completions
    ///
    /// Outputs the completion script for the specified shell.
    ///
    /// Example: task-intent completions bash > ~/.bash_completion.d/task-intent
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Keyword table selection shared by the parsing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ParserArgs {
    /// Built-in keyword table to use
    #[arg(short, long, value_enum)]
    pub locale: Option<Locale>,

    /// Custom keyword table (YAML), overrides --locale
    #[arg(short, long, value_name = "FILE")]
    pub keywords: Option<PathBuf>,
}

/// Arguments for the parse command.
#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// The task sentence (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Reference time for relative dates (YYYY-MM-DD[THH:MM[:SS]])
    #[arg(long, value_name = "TIME")]
    pub now: Option<String>,

    #[command(flatten)]
    pub parser: ParserArgs,
}

/// Arguments for the batch command.
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Reference time for relative dates (YYYY-MM-DD[THH:MM[:SS]])
    #[arg(long, value_name = "TIME")]
    pub now: Option<String>,

    #[command(flatten)]
    pub parser: ParserArgs,
}

/// Arguments for the keywords command.
#[derive(Args, Debug, Clone)]
pub struct KeywordsArgs {
    #[command(flatten)]
    pub parser: ParserArgs,
}
