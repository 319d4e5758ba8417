//! # invscan-source
//!
//! **Tier 2 (Utilities)**
//!
//! Obtains the raw inventory document: by running
//! `ansible-inventory -i <path> --list`, or by reading JSON that was listed
//! earlier (file or stdin).
//!
//! ## What belongs here
//! * Subprocess invocation and exit-status handling
//! * JSON decoding of the listing
//!
//! ## What does NOT belong here
//! * Entry classification (use invscan-model)
//! * Rendering (use invscan-format)

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{debug, info};

/// Program run when nothing else is configured.
pub const DEFAULT_COMMAND: &str = "ansible-inventory";

/// How to invoke the inventory-listing program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    pub command: String,
    /// Appended after `-i <path> --list`.
    pub extra_args: Vec<String>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            extra_args: Vec::new(),
        }
    }
}

/// Where the raw inventory JSON comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventorySource {
    /// Run the listing program against an inventory file or directory.
    Ansible(PathBuf),
    /// Read an already-listed JSON document.
    JsonFile(PathBuf),
    Stdin,
}

impl InventorySource {
    /// Map a `--from-json` argument; `-` means stdin.
    pub fn from_json_arg(path: &Path) -> Self {
        if path == Path::new("-") {
            InventorySource::Stdin
        } else {
            InventorySource::JsonFile(path.to_path_buf())
        }
    }
}

pub fn command_available(cmd: &str) -> bool {
    Command::new(cmd)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run `<command> -i <path> --list` and decode its stdout.
pub fn run_ansible_inventory(path: &Path, opts: &SourceOptions) -> Result<Value> {
    if !path.exists() {
        bail!("Inventory path does not exist: {}", path.display());
    }

    debug!(
        command = %opts.command,
        path = %path.display(),
        extra = ?opts.extra_args,
        "listing inventory"
    );

    let output = Command::new(&opts.command)
        .arg("-i")
        .arg(path)
        .arg("--list")
        .args(&opts.extra_args)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("Failed to run `{}`", opts.command))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "`{}` exited with {}: {}",
            opts.command,
            output.status,
            stderr.trim()
        );
    }

    info!(command = %opts.command, bytes = output.stdout.len(), "inventory listed");

    serde_json::from_slice(&output.stdout)
        .with_context(|| format!("Failed to parse JSON output from `{}`", opts.command))
}

pub fn parse_inventory_json(text: &str) -> Result<Value> {
    serde_json::from_str(text).context("Failed to parse inventory JSON")
}

pub fn read_inventory_from<R: Read>(mut reader: R) -> Result<Value> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Failed to read inventory JSON")?;
    parse_inventory_json(&text)
}

/// Read a listed inventory from `path`, or from stdin when `path` is `-`.
pub fn read_inventory_json(path: &Path) -> Result<Value> {
    if path == Path::new("-") {
        return read_inventory_from(std::io::stdin().lock());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_inventory_json(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

pub fn load(source: &InventorySource, opts: &SourceOptions) -> Result<Value> {
    match source {
        InventorySource::Ansible(path) => run_ansible_inventory(path, opts),
        InventorySource::JsonFile(path) => read_inventory_json(path),
        InventorySource::Stdin => read_inventory_from(std::io::stdin().lock()),
    }
}
