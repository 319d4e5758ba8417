//! # invscan-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the data structures shared by every `invscan` crate:
//! the raw inventory entries produced by `ansible-inventory --list` and the
//! normalized report built from them.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: the primary contract is the JSON shape of
//! [`InventoryReport`] (`hosts`, `groups`, `summary`). Field names match the
//! report emitted by earlier scanner versions so downstream scripts keep
//! working.
//!
//! ## What belongs here
//! * Pure data structs (entries, records, reports)
//! * Serialization/Deserialization logic
//! * Output format enums shared with the CLI
//!
//! ## What does NOT belong here
//! * File I/O or subprocess calls
//! * CLI argument parsing
//! * The reshaping logic itself (see `invscan-model`)

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Top-level keys emitted by `ansible-inventory` that are never hosts or groups.
pub const RESERVED_KEYS: [&str; 2] = ["_meta", "all"];

/// Variables attached to a host or group.
pub type Vars = BTreeMap<String, Value>;

/// A group-shaped entry: anything carrying a `hosts` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub hosts: Vec<String>,
    #[serde(default)]
    pub vars: Vars,
    #[serde(default)]
    pub children: Vec<String>,
}

/// A host-shaped entry: no `hosts` list, only optional variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostEntry {
    #[serde(default)]
    pub vars: Vars,
}

/// One top-level value of the raw inventory mapping.
///
/// Deserialization never fails on a well-formed JSON value: it goes through
/// [`InventoryEntry::from_value`], so an object with a `hosts` key is a group
/// and malformed fields fall back to empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InventoryEntry {
    Group(GroupEntry),
    Host(HostEntry),
}

impl InventoryEntry {
    /// Classify a single raw entry.
    ///
    /// An object with a `hosts` key is a group, whatever the value of `hosts`.
    /// Everything else, including non-objects, is a host. Non-string names
    /// are dropped and non-object `vars` become empty.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return InventoryEntry::Host(HostEntry::default());
        };

        let vars = obj.get("vars").map(vars_from_value).unwrap_or_default();

        match obj.get("hosts") {
            Some(hosts) => InventoryEntry::Group(GroupEntry {
                hosts: string_list(hosts),
                vars,
                children: obj.get("children").map(string_list).unwrap_or_default(),
            }),
            None => InventoryEntry::Host(HostEntry { vars }),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, InventoryEntry::Group(_))
    }

    pub fn vars(&self) -> &Vars {
        match self {
            InventoryEntry::Group(g) => &g.vars,
            InventoryEntry::Host(h) => &h.vars,
        }
    }
}

impl From<Value> for InventoryEntry {
    fn from(value: Value) -> Self {
        InventoryEntry::from_value(&value)
    }
}

impl<'de> Deserialize<'de> for InventoryEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(InventoryEntry::from)
    }
}

impl From<GroupEntry> for InventoryEntry {
    fn from(g: GroupEntry) -> Self {
        InventoryEntry::Group(g)
    }
}

impl From<HostEntry> for InventoryEntry {
    fn from(h: HostEntry) -> Self {
        InventoryEntry::Host(h)
    }
}

/// The raw mapping, keyed by entry name. Iteration is sorted by name.
pub type RawInventory = BTreeMap<String, InventoryEntry>;

fn vars_from_value(value: &Value) -> Vars {
    value
        .as_object()
        .map(|obj| obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default()
}

fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostRecord {
    pub vars: Vars,
    /// Groups listing this host, in group iteration order.
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub hosts: Vec<String>,
    pub vars: Vars,
    pub children: Vec<String>,
}

impl From<GroupEntry> for GroupRecord {
    fn from(g: GroupEntry) -> Self {
        Self {
            hosts: g.hosts,
            vars: g.vars,
            children: g.children,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_hosts: usize,
    pub total_groups: usize,
    /// Direct member count per group; children are not expanded.
    pub hosts_by_group: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryReport {
    pub hosts: BTreeMap<String, HostRecord>,
    pub groups: BTreeMap<String, GroupRecord>,
    pub summary: InventorySummary,
}

// -----------------------------------------------------------------------------
// Enums shared with CLI
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON of the full report.
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
