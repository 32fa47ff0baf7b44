use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io;

/// Emit the completion script for the `clipnote` binary on stdout, ready
/// to be sourced or installed for the requested shell.
pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    let bin = cmd.get_name().to_string();
    generate(shell, cmd, bin, &mut io::stdout());
    Ok(())
}
