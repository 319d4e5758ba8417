use anyhow::Result;
use invscan_config as cli;
use invscan_format as format;
use invscan_model as model;
use invscan_source as source;
use tracing::{debug, info, warn};

use crate::config::{self, ResolvedConfig};

pub(crate) fn handle(args: cli::CliScanArgs, resolved: &ResolvedConfig) -> Result<()> {
    let plan = config::resolve_scan(&args, resolved, config::env_command())?;
    debug!(
        config = ?resolved.path,
        source = ?plan.source,
        format = plan.format.as_str(),
        "scan plan"
    );

    let raw = source::load(&plan.source, &plan.options)?;
    if !raw.is_object() {
        warn!("inventory JSON is not an object; the report will be empty");
    }

    let inventory = model::raw_inventory_from_value(&raw);
    let report = model::analyze_inventory(&inventory);
    info!(
        entries = inventory.len(),
        hosts = report.summary.total_hosts,
        groups = report.summary.total_groups,
        "inventory analyzed"
    );

    match &plan.out {
        Some(path) => format::write_report_to_file(path, &report, plan.format)?,
        None => format::print_report(&report, plan.format)?,
    }
    Ok(())
}
