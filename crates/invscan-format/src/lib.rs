//! # invscan-format
//!
//! **Tier 3 (Formatting)**
//!
//! This crate handles the rendering and serialization of inventory reports.
//! It supports a fixed-layout text report and pretty-printed JSON.
//!
//! ## What belongs here
//! * Text report rendering
//! * JSON serialization
//! * Output file writing
//!
//! ## What does NOT belong here
//! * Business logic (membership, counts)
//! * CLI arg parsing

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use invscan_types::{InventoryReport, OutputFormat};

/// Width of the `=` rule framing the text report title.
const RULE_WIDTH: usize = 60;

/// Render the report in the given format.
pub fn render(report: &InventoryReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Render the human-readable report.
///
/// Per-host `Variables:` and per-group `Children:`/`Variables:` lines are
/// only emitted when non-empty.
pub fn render_text(report: &InventoryReport) -> String {
    let mut s = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    s.push_str(&format!("{rule}\n"));
    s.push_str("ANSIBLE INVENTORY ANALYSIS REPORT\n");
    s.push_str(&format!("{rule}\n"));

    s.push_str("\nSUMMARY:\n");
    s.push_str(&format!("  Total Hosts: {}\n", report.summary.total_hosts));
    s.push_str(&format!("  Total Groups: {}\n", report.summary.total_groups));

    s.push_str("\nHOSTS BY GROUP:\n");
    for (group, count) in &report.summary.hosts_by_group {
        s.push_str(&format!("  {group}: {count} hosts\n"));
    }

    s.push_str("\nDETAILED HOST INFORMATION:\n");
    for (name, host) in &report.hosts {
        s.push_str(&format!("\n  Host: {name}\n"));
        s.push_str(&format!("    Groups: {}\n", host.groups.join(", ")));
        if !host.vars.is_empty() {
            s.push_str(&format!("    Variables: {} defined\n", host.vars.len()));
        }
    }

    s.push_str("\nGROUP STRUCTURE:\n");
    for (name, group) in &report.groups {
        s.push_str(&format!("\n  Group: {name}\n"));
        if !group.children.is_empty() {
            s.push_str(&format!("    Children: {}\n", group.children.join(", ")));
        }
        if !group.vars.is_empty() {
            s.push_str(&format!("    Variables: {} defined\n", group.vars.len()));
        }
    }

    s
}

/// Pretty JSON (two-space indent) with a trailing newline.
pub fn render_json(report: &InventoryReport) -> Result<String> {
    let mut s = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    s.push('\n');
    Ok(s)
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &InventoryReport,
    format: OutputFormat,
) -> Result<()> {
    let rendered = render(report, format)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Write the rendered report to stdout.
pub fn print_report(report: &InventoryReport, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format)
}

/// Write the rendered report to `path`, creating or truncating it.
pub fn write_report_to_file(
    path: &Path,
    report: &InventoryReport,
    format: OutputFormat,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, report, format)
}
