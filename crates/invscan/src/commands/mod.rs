pub(crate) mod completions;
pub(crate) mod scan;

use anyhow::Result;
use invscan_config as cli;

use crate::config;

pub(crate) fn dispatch(cli: cli::Cli) -> Result<()> {
    match cli.command.unwrap_or(cli::Commands::Scan(cli.scan)) {
        cli::Commands::Completions(args) => completions::handle(args),
        cli::Commands::Scan(args) => {
            let resolved = config::load_config(cli.global.config.as_deref())?;
            scan::handle(args, &resolved)
        }
    }
}
