//! Inventory records derived from one ARP table snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::arp_table::{ArpEntryType, ArpTableSnapshot};

/// Tree position of the summary attributes.
pub const ARP_CACHE_PATH: &[&str] = &["networking", "arp_cache"];

/// Child table holding one row per cache entry.
pub const ARP_CACHE_ENTRIES_PATH: &[&str] = &["networking", "arp_cache", "entries"];

/// Upper bound the configuration surface accepts for `max_entries`.
pub const MAX_ENTRIES_LIMIT: u32 = 10_000;

/// Per-invocation knobs supplied by the monitoring system's rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryParams {
    /// Cap on emitted detail rows. Zero disables the cap; the summary covers
    /// the full entry set either way.
    pub max_entries: u32,
}

impl Default for InventoryParams {
    fn default() -> Self {
        Self { max_entries: 1000 }
    }
}

impl InventoryParams {
    fn detail_cap(&self) -> usize {
        if self.max_entries == 0 {
            usize::MAX
        } else {
            self.max_entries as usize
        }
    }
}

/// Aggregate counters over the full filtered entry set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_entries: u64,
    pub dynamic_entries: u64,
    pub static_entries: u64,
    pub other_entries: u64,
    pub interfaces_count: u64,
}

impl InventorySummary {
    /// Counters over every entry in the snapshot; `other_entries` buckets
    /// whatever is neither dynamic nor static.
    pub fn of(snapshot: &ArpTableSnapshot) -> Self {
        let total_entries = snapshot.entries.len() as u64;
        let dynamic_entries =
            snapshot.entries.iter().filter(|e| e.entry_type == ArpEntryType::Dynamic).count() as u64;
        let static_entries =
            snapshot.entries.iter().filter(|e| e.entry_type == ArpEntryType::Static).count() as u64;
        let interfaces: HashSet<&str> = snapshot.entries.iter().map(|e| e.interface_index.as_str()).collect();
        Self {
            total_entries,
            dynamic_entries,
            static_entries,
            other_entries: total_entries - dynamic_entries - static_entries,
            interfaces_count: interfaces.len() as u64,
        }
    }
}

/// One row of the entries table, keyed by interface label and IP address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArpCacheRow {
    pub interface: String,
    pub ip_address: String,
    pub mac_address: String,
    pub entry_type: ArpEntryType,
}

/// What the inventory sink ingests: a summary for the `arp_cache` node or
/// one row of its entries table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InventoryRecord {
    Summary(InventorySummary),
    Entry(ArpCacheRow),
}

impl InventoryRecord {
    /// Tree path the sink stores this record under.
    pub fn path(&self) -> &'static [&'static str] {
        match self {
            InventoryRecord::Summary(_) => ARP_CACHE_PATH,
            InventoryRecord::Entry(_) => ARP_CACHE_ENTRIES_PATH,
        }
    }
}

/// Render one cycle's records: a summary over the whole snapshot followed by
/// at most `max_entries` detail rows. An empty snapshot yields nothing at
/// all, so the subtree disappears from the inventory instead of showing
/// zeroes.
pub fn inventory_arp_table(params: &InventoryParams, snapshot: &ArpTableSnapshot) -> Vec<InventoryRecord> {
    if snapshot.entries.is_empty() {
        return Vec::new();
    }
    let cap = params.detail_cap();
    let mut records = Vec::with_capacity(snapshot.entries.len().min(cap) + 1);
    records.push(InventoryRecord::Summary(InventorySummary::of(snapshot)));
    for entry in snapshot.entries.iter().take(cap) {
        records.push(InventoryRecord::Entry(ArpCacheRow {
            interface: format!("Interface {}", entry.interface_index),
            ip_address: entry.ip_address.clone(),
            mac_address: entry.mac_address.clone(),
            entry_type: entry.entry_type,
        }));
    }
    records
}
