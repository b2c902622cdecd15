//! Periodic collection of the device's ARP table into inventory records.

use std::sync::Arc;

use anyhow::Result;
use prometheus_client::{
    encoding::EncodeLabelSet,
    metrics::{counter::Counter, family::Family, gauge::Gauge},
    registry::Registry,
};
use tokio::sync::RwLock;

use crate::arp_table::{self, ArpEntryType};
use crate::inventory::{self, InventoryParams, InventoryRecord, InventorySummary};
use crate::snmp;

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
struct EntryTypeLabels {
    entry_type: String,
}

#[derive(Default, Clone)]
struct ArpInventoryRegistry {
    entries: Gauge,
    entries_by_type: Family<EntryTypeLabels, Gauge>,
    interfaces: Gauge,
    collections: Counter,
    collection_errors: Counter,
}

impl ArpInventoryRegistry {
    fn register(&self, registry: &mut Registry) {
        registry.register("arp_inventory_entries", "ARP cache entries in the last snapshot", self.entries.clone());
        registry.register("arp_inventory_entries_by_type", "ARP cache entries by entry type", self.entries_by_type.clone());
        registry.register(
            "arp_inventory_interfaces",
            "Interfaces with at least one ARP cache entry",
            self.interfaces.clone(),
        );
        registry.register("arp_inventory_collections", "Completed collection cycles", self.collections.clone());
        registry.register("arp_inventory_collection_errors", "Failed collection cycles", self.collection_errors.clone());
    }
}

/// Reads the ARP table dump on a schedule and keeps the latest inventory
/// records for the HTTP surface.
#[derive(Clone)]
pub struct ArpInventory {
    table_path: String,
    params: InventoryParams,
    records: Arc<RwLock<Vec<InventoryRecord>>>,
    registry: ArpInventoryRegistry,
}

impl ArpInventory {
    pub fn new(table_path: String, params: InventoryParams) -> Self {
        Self { table_path, params, records: Arc::new(RwLock::new(Vec::new())), registry: ArpInventoryRegistry::default() }
    }

    pub fn register(&self, registry: &mut Registry) {
        self.registry.register(registry);
    }

    /// One collection cycle. A failed cycle leaves the previously served
    /// records in place and bumps the error counter.
    pub async fn update_inventory(&self) -> Result<()> {
        match self.collect().await {
            Ok(()) => {
                self.registry.collections.inc();
                Ok(())
            }
            Err(e) => {
                self.registry.collection_errors.inc();
                Err(e)
            }
        }
    }

    /// Latest emitted records, empty until the first successful cycle.
    pub async fn records(&self) -> Vec<InventoryRecord> {
        self.records.read().await.clone()
    }

    async fn collect(&self) -> Result<()> {
        log::debug!("Updating arp inventory from {}", self.table_path);
        let tables = snmp::load_table_dump(&self.table_path).await?;
        let snapshot = arp_table::parse_arp_table(&tables);
        let summary = InventorySummary::of(&snapshot);
        self.registry.entries.set(summary.total_entries as i64);
        self.registry.interfaces.set(summary.interfaces_count as i64);
        for entry_type in ArpEntryType::ALL {
            let count = snapshot.entries.iter().filter(|e| e.entry_type == entry_type).count();
            self.registry
                .entries_by_type
                .get_or_create(&EntryTypeLabels { entry_type: entry_type.to_string() })
                .set(count as i64);
        }
        let records = inventory::inventory_arp_table(&self.params, &snapshot);
        log::debug!("arp inventory: {} entries, {} records", snapshot.entries.len(), records.len());
        *self.records.write().await = records;
        Ok(())
    }
}
