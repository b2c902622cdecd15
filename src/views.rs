//! Declarative rendering hints for the inventory tree.
//!
//! The web layer consumes these once at startup (also served under
//! `/inventory/hints`); nothing mutates them at runtime.

use serde::Serialize;

/// Rendering instruction for one inventory tree path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayHint {
    /// Dotted tree path. A trailing `.` marks an attribute node, a trailing
    /// `:` a table node, and `:*.` a column within a table.
    pub path: &'static str,
    pub title: &'static str,
    pub short: Option<&'static str>,
    pub key_order: &'static [&'static str],
    pub icon: Option<&'static str>,
}

pub const DISPLAY_HINTS: &[DisplayHint] = &[
    DisplayHint {
        path: ".networking.arp_cache.",
        title: "ARP Cache",
        short: None,
        key_order: &["total_entries", "dynamic_entries", "static_entries", "other_entries", "interfaces_count"],
        icon: None,
    },
    DisplayHint {
        path: ".networking.arp_cache.total_entries",
        title: "Total Entries",
        short: Some("Total"),
        key_order: &[],
        icon: None,
    },
    DisplayHint {
        path: ".networking.arp_cache.dynamic_entries",
        title: "Dynamic Entries",
        short: Some("Dynamic"),
        key_order: &[],
        icon: None,
    },
    DisplayHint {
        path: ".networking.arp_cache.static_entries",
        title: "Static Entries",
        short: Some("Static"),
        key_order: &[],
        icon: None,
    },
    DisplayHint {
        path: ".networking.arp_cache.other_entries",
        title: "Other Entries",
        short: Some("Other"),
        key_order: &[],
        icon: None,
    },
    DisplayHint {
        path: ".networking.arp_cache.interfaces_count",
        title: "Interfaces Count",
        short: Some("Interfaces"),
        key_order: &[],
        icon: None,
    },
    DisplayHint {
        path: ".networking.arp_cache.entries:",
        title: "ARP Table Entries",
        short: None,
        key_order: &["interface", "ip_address", "mac_address", "entry_type"],
        icon: Some("inv_networking"),
    },
    DisplayHint {
        path: ".networking.arp_cache.entries:*.interface",
        title: "Interface",
        short: Some("IF"),
        key_order: &[],
        icon: None,
    },
    DisplayHint {
        path: ".networking.arp_cache.entries:*.ip_address",
        title: "IP Address",
        short: Some("IP"),
        key_order: &[],
        icon: None,
    },
    DisplayHint {
        path: ".networking.arp_cache.entries:*.mac_address",
        title: "MAC Address",
        short: Some("MAC"),
        key_order: &[],
        icon: None,
    },
    DisplayHint {
        path: ".networking.arp_cache.entries:*.entry_type",
        title: "Entry Type",
        short: Some("Type"),
        key_order: &[],
        icon: None,
    },
];

/// Hint declared for one exact path, if any.
pub fn hint_for(path: &str) -> Option<&'static DisplayHint> {
    DISPLAY_HINTS.iter().find(|hint| hint.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arp_table::{ArpEntry, ArpEntryType, ArpTableSnapshot};
    use crate::inventory::{inventory_arp_table, InventoryParams};

    #[test]
    fn every_summary_key_is_a_summary_field() {
        let snapshot = ArpTableSnapshot {
            entries: vec![ArpEntry {
                interface_index: "1".to_string(),
                ip_address: "10.0.0.1".to_string(),
                mac_address: "94:2a:6f:0c:a9:09".to_string(),
                entry_type: ArpEntryType::Dynamic,
            }],
        };
        let records = inventory_arp_table(&InventoryParams::default(), &snapshot);
        let summary = serde_json::to_value(&records[0]).unwrap();
        let hint = hint_for(".networking.arp_cache.").unwrap();
        for key in hint.key_order {
            assert!(summary.get(*key).is_some(), "summary has no field {}", key);
        }
        let row = serde_json::to_value(&records[1]).unwrap();
        let hint = hint_for(".networking.arp_cache.entries:").unwrap();
        for key in hint.key_order {
            assert!(row.get(*key).is_some(), "detail row has no field {}", key);
        }
    }

    #[test]
    fn key_orders_match_the_sink_schema() {
        assert_eq!(
            hint_for(".networking.arp_cache.").unwrap().key_order,
            &["total_entries", "dynamic_entries", "static_entries", "other_entries", "interfaces_count"],
        );
        assert_eq!(
            hint_for(".networking.arp_cache.entries:").unwrap().key_order,
            &["interface", "ip_address", "mac_address", "entry_type"],
        );
    }

    #[test]
    fn the_entries_table_carries_the_networking_icon() {
        assert_eq!(hint_for(".networking.arp_cache.entries:").unwrap().icon, Some("inv_networking"));
    }

    #[test]
    fn every_table_column_has_a_hint() {
        for column in ["interface", "ip_address", "mac_address", "entry_type"] {
            let path = format!(".networking.arp_cache.entries:*.{}", column);
            let hint = hint_for(&path).unwrap_or_else(|| panic!("no hint for {}", path));
            assert!(hint.short.is_some());
        }
    }

    #[test]
    fn unknown_paths_have_no_hint() {
        assert!(hint_for(".networking.routes.").is_none());
    }
}
