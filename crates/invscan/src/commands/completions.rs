use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell as Target, generate};
use invscan_config::{Cli, CompletionsArgs, Shell};

fn target(shell: Shell) -> Target {
    match shell {
        Shell::Bash => Target::Bash,
        Shell::Elvish => Target::Elvish,
        Shell::Fish => Target::Fish,
        Shell::Powershell => Target::PowerShell,
        Shell::Zsh => Target::Zsh,
    }
}

/// Print the completion script for `args.shell` to stdout.
pub(crate) fn handle(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(target(args.shell), &mut cmd, bin, &mut io::stdout());
    Ok(())
}
