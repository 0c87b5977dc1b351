//! Shell completions generation.
//!
//! Generates completion scripts for bash, zsh, fish, `PowerShell` and elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;

/// Binary name the completions are registered for.
const BIN_NAME: &str = "task-intent";

/// Generate the completion script for `shell`.
#[must_use]
pub fn generate_completions(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(task-intent completions bash)
"
        .to_string(),

        Shell::Zsh => r"# Save to your fpath:
task-intent completions zsh > ~/.zsh/completions/_task-intent
# Then add to ~/.zshrc (before compinit):
fpath=(~/.zsh/completions $fpath)
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
task-intent completions fish > ~/.config/fish/completions/task-intent.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
task-intent completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Save to elvish completions directory:
task-intent completions elvish > ~/.elvish/lib/task-intent.elv
"
        .to_string(),

        _ => "Unknown shell".to_string(),
    }
}
