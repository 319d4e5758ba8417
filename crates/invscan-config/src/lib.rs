//! # invscan-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and the `invscan.toml` file
//! structure.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations (except config file parsing)
//! * Precedence resolution between CLI, environment and file (see `invscan`)

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
pub use invscan_types::OutputFormat;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "invscan.toml";

/// `invscan`: summarize an Ansible inventory by host and group.
///
/// Default mode (no subcommand) scans the given inventory.
#[derive(Parser, Debug)]
#[command(name = "invscan", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Options for the implicit `scan` mode (when no subcommand is provided).
    #[command(flatten)]
    pub scan: CliScanArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Read settings from this TOML file instead of discovering `invscan.toml`.
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging to stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze an inventory and print the report (default).
    Scan(CliScanArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CliScanArgs {
    /// Path to inventory file or directory.
    #[arg(value_name = "INVENTORY")]
    pub inventory: Option<PathBuf>,

    /// Output format [default: text].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read an already-listed inventory (JSON) instead of running
    /// `ansible-inventory`. Use `-` for stdin.
    #[arg(long, value_name = "FILE", conflicts_with = "inventory")]
    pub from_json: Option<PathBuf>,

    /// Program used to list the inventory [default: ansible-inventory].
    ///
    /// Also settable via `INVSCAN_ANSIBLE_INVENTORY`.
    #[arg(long = "ansible-inventory", value_name = "CMD")]
    pub ansible_inventory: Option<String>,

    /// Write the report to a file instead of stdout.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

// =============================================================================
// TOML Configuration File Structures
// =============================================================================

/// Root TOML configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// How the inventory is listed.
    pub scan: ScanConfig,

    /// How the report is rendered.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Program to run instead of `ansible-inventory`.
    pub command: Option<String>,

    /// Extra arguments appended after `-i <path> --list`.
    pub extra_args: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// "text" or "json".
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
