use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use invscan_config::{CONFIG_FILE_NAME, CliScanArgs, OutputFormat, TomlConfig};
use invscan_source::{DEFAULT_COMMAND, InventorySource, SourceOptions};
use tracing::{debug, warn};

/// Overrides the listing program when no `--ansible-inventory` flag is given.
pub(crate) const COMMAND_ENV: &str = "INVSCAN_ANSIBLE_INVENTORY";

/// The config file in effect, if any.
#[derive(Debug, Clone, Default)]
pub(crate) struct ResolvedConfig {
    pub toml: Option<TomlConfig>,
    pub path: Option<PathBuf>,
}

/// Everything the scan command needs, after applying precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanPlan {
    pub source: InventorySource,
    pub options: SourceOptions,
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
}

/// Load `--config` if given (errors are fatal), otherwise discover
/// `./invscan.toml` and then `<config_dir>/invscan/config.toml`.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<ResolvedConfig> {
    if let Some(path) = explicit {
        let toml = TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        debug!(path = %path.display(), "loaded explicit config");
        return Ok(ResolvedConfig {
            toml: Some(toml),
            path: Some(path.to_path_buf()),
        });
    }

    for candidate in discovery_candidates() {
        if !candidate.is_file() {
            continue;
        }
        match TomlConfig::from_file(&candidate) {
            Ok(toml) => {
                debug!(path = %candidate.display(), "discovered config");
                return Ok(ResolvedConfig {
                    toml: Some(toml),
                    path: Some(candidate),
                });
            }
            Err(err) => {
                warn!(path = %candidate.display(), error = %err, "ignoring unreadable config");
            }
        }
    }

    Ok(ResolvedConfig::default())
}

fn discovery_candidates() -> Vec<PathBuf> {
    let mut out = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        out.push(dir.join("invscan").join("config.toml"));
    }
    out
}

pub(crate) fn env_command() -> Option<String> {
    std::env::var(COMMAND_ENV).ok().filter(|s| !s.trim().is_empty())
}

/// Precedence: CLI flag > environment > config file > built-in default.
pub(crate) fn resolve_scan(
    args: &CliScanArgs,
    resolved: &ResolvedConfig,
    env_command: Option<String>,
) -> Result<ScanPlan> {
    let toml = resolved.toml.as_ref();

    let source = match (&args.from_json, &args.inventory) {
        (Some(json), _) => InventorySource::from_json_arg(json),
        (None, Some(path)) => InventorySource::Ansible(path.clone()),
        (None, None) => {
            bail!("No inventory given: pass an INVENTORY path or --from-json <FILE>")
        }
    };

    let command = args
        .ansible_inventory
        .clone()
        .or(env_command)
        .or_else(|| toml.and_then(|t| t.scan.command.clone()))
        .unwrap_or_else(|| DEFAULT_COMMAND.to_string());

    let extra_args = toml
        .and_then(|t| t.scan.extra_args.clone())
        .unwrap_or_default();

    let format = args
        .format
        .or_else(|| toml.and_then(|t| t.output.format))
        .unwrap_or_default();

    Ok(ScanPlan {
        source,
        options: SourceOptions {
            command,
            extra_args,
        },
        format,
        out: args.out.clone(),
    })
}
