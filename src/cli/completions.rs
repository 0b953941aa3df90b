//! Completions command.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

use crate::cli::{Cli, Shell};
use crate::error::Result;

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => CompletionShell::Bash,
            Shell::Zsh => CompletionShell::Zsh,
            Shell::Fish => CompletionShell::Fish,
            Shell::PowerShell => CompletionShell::PowerShell,
        }
    }
}

/// Print the completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    write_script(shell, &mut std::io::stdout().lock())
}

/// Write the completion script for `shell`, named after the binary.
pub fn write_script(shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(CompletionShell::from(shell), &mut cmd, bin, &mut *out);
    out.flush()?;
    Ok(())
}
