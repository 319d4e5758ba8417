//! # invscan
//!
//! **CLI Binary**
//!
//! This is the entry point for the `invscan` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load configuration
//! * Initialize logging
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod logging;

use anyhow::Result;
use clap::Parser;
use invscan_config::Cli;

/// Entry point used by the `invscan` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);
    commands::dispatch(cli)
}

/// Render an error chain plus remediation hints for stderr.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
