//! Completions command implementation.

use clap_complete::Shell;

use crate::features::shell::{completion_install_instructions, generate_completions};

/// Return the completion script, or installation instructions when
/// `install` is set.
#[must_use]
pub fn completions(shell: Shell, install: bool) -> String {
    if install {
        completion_install_instructions(shell)
    } else {
        generate_completions(shell)
    }
}
