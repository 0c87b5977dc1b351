//! Configuration management for task-intent.
//!
//! This module handles loading and saving configuration from `~/.task-intent/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, ParserConfig, ParserHandle};
