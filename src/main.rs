use std::io;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use task_intent::cli::args::{Cli, Commands};
use task_intent::cli::commands::{self, Context};
use task_intent::config::{Config, Paths};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = Paths::default();
    let config_file = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    let config = Config::load_from_path(&config_file)
        .with_context(|| format!("Failed to load {}", config_file.display()))?;
    config.general.color.apply();

    let ctx = Context {
        format: cli.output.unwrap_or(config.general.default_output),
        config,
        paths,
    };

    let output = match &cli.command {
        Commands::Parse(args) => commands::parse(&ctx, args)?,
        Commands::Batch(args) => {
            commands::batch(&ctx, args, io::stdin().lock()).context("Failed to parse stdin")?
        },
        Commands::Keywords(args) => commands::keywords(&ctx, args)?,
        Commands::Completions { shell, install } => commands::completions(*shell, *install),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Send log records to stderr; `-v` for debug, `-vv` for trace.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).ok();
}
