//! # invscan-model
//!
//! **Tier 2 (Model)**
//!
//! Turns the raw `ansible-inventory --list` mapping into an
//! [`InventoryReport`]: hosts with reverse-looked-up group membership, groups
//! as listed, and summary counts.
//!
//! ## What belongs here
//! * Lenient classification of raw JSON entries into groups and hosts
//! * The reshaping pass and summary counts
//!
//! ## What does NOT belong here
//! * Running `ansible-inventory` (use invscan-source)
//! * Rendering (use invscan-format)
//!
//! Nothing in this crate fails. Malformed fields fall back to empty
//! collections.

use invscan_types::{
    GroupRecord, HostRecord, InventoryEntry, InventoryReport, RESERVED_KEYS, RawInventory,
};
use serde_json::Value;

/// True for the top-level keys that never describe a host or group.
pub fn is_reserved_key(name: &str) -> bool {
    RESERVED_KEYS.contains(&name)
}

/// Classify a single raw entry.
///
/// An object with a `hosts` key is a group, whatever the value of `hosts`.
/// Everything else, including non-objects, is a host. This is the same rule
/// `InventoryEntry`'s `Deserialize` impl applies.
pub fn classify_entry(value: &Value) -> InventoryEntry {
    InventoryEntry::from_value(value)
}

/// Classify every top-level entry. A non-object document yields an empty map.
///
/// Reserved keys are kept here; [`analyze_inventory`] skips them.
pub fn raw_inventory_from_value(value: &Value) -> RawInventory {
    value
        .as_object()
        .map(|obj| {
            obj.iter()
                .map(|(name, entry)| (name.clone(), classify_entry(entry)))
                .collect()
        })
        .unwrap_or_default()
}

/// Build the report from a classified inventory.
///
/// Groups are visited in name order, so each host's `groups` list is sorted
/// by group name. A host listed twice by the same group gets that group
/// twice. Members that are not hosts (nested groups, unknown names) are
/// ignored.
pub fn analyze_inventory(raw: &RawInventory) -> InventoryReport {
    let mut report = InventoryReport::default();

    for (name, entry) in raw.iter().filter(|(name, _)| !is_reserved_key(name)) {
        match entry {
            InventoryEntry::Group(group) => {
                report
                    .summary
                    .hosts_by_group
                    .insert(name.clone(), group.hosts.len());
                report
                    .groups
                    .insert(name.clone(), GroupRecord::from(group.clone()));
            }
            InventoryEntry::Host(host) => {
                report.hosts.insert(
                    name.clone(),
                    HostRecord {
                        vars: host.vars.clone(),
                        groups: Vec::new(),
                    },
                );
            }
        }
    }

    for (group_name, group) in &report.groups {
        for member in &group.hosts {
            if let Some(host) = report.hosts.get_mut(member) {
                host.groups.push(group_name.clone());
            }
        }
    }

    report.summary.total_hosts = report.hosts.len();
    report.summary.total_groups = report.groups.len();

    report
}

/// Classify and analyze a raw JSON document in one step.
pub fn analyze_value(value: &Value) -> InventoryReport {
    analyze_inventory(&raw_inventory_from_value(value))
}
