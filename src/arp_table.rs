//! The ipNetToMediaTable section: raw fetched rows to typed cache entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mac::{self, ALL_ZERO_MAC, INVALID_MAC};
use crate::snmp::SnmpTable;

/// How the agent learned one mapping (ipNetToMediaType).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArpEntryType {
    Other,
    Invalid,
    Dynamic,
    Static,
    Unknown,
}

impl ArpEntryType {
    pub const ALL: [ArpEntryType; 5] = [
        ArpEntryType::Other,
        ArpEntryType::Invalid,
        ArpEntryType::Dynamic,
        ArpEntryType::Static,
        ArpEntryType::Unknown,
    ];

    /// Numeric ipNetToMediaType code to name; anything unrecognised maps to
    /// [`ArpEntryType::Unknown`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "1" => ArpEntryType::Other,
            "2" => ArpEntryType::Invalid,
            "3" => ArpEntryType::Dynamic,
            "4" => ArpEntryType::Static,
            _ => ArpEntryType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArpEntryType::Other => "other",
            ArpEntryType::Invalid => "invalid",
            ArpEntryType::Dynamic => "dynamic",
            ArpEntryType::Static => "static",
            ArpEntryType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ArpEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved neighbour from the device's ARP cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArpEntry {
    pub interface_index: String,
    pub ip_address: String,
    pub mac_address: String,
    pub entry_type: ArpEntryType,
}

/// Parsed, filtered result of one collection cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArpTableSnapshot {
    pub entries: Vec<ArpEntry>,
}

/// Turn the fetched tables into typed entries. Only the first table is
/// relevant (the section fetches a single subtree). Rows with fewer than
/// four cells are skipped, and entries whose address is empty, the all-zero
/// placeholder or not recoverable are filtered out. Row order is preserved
/// and duplicates pass through untouched.
pub fn parse_arp_table(tables: &[SnmpTable]) -> ArpTableSnapshot {
    let rows = match tables.first() {
        Some(rows) => rows,
        None => return ArpTableSnapshot::default(),
    };
    let mut entries = Vec::new();
    for row in rows {
        if row.len() < 4 {
            log::debug!("skipping ipNetToMedia row with {} cells", row.len());
            continue;
        }
        let interface_index = row[0].as_text().into_owned();
        let mac_address = mac::normalize_mac(&row[1]);
        let ip_address = row[2].as_text().into_owned();
        let entry_type = ArpEntryType::from_code(row[3].as_text().as_ref());
        if ip_address.is_empty() || mac_address == ALL_ZERO_MAC || mac_address == INVALID_MAC {
            continue;
        }
        entries.push(ArpEntry { interface_index, ip_address, mac_address, entry_type });
    }
    ArpTableSnapshot { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snmp::{SnmpRow, SnmpValue};

    fn row(iface: &str, mac: SnmpValue, ip: &str, code: &str) -> SnmpRow {
        vec![
            SnmpValue::Text(iface.to_string()),
            mac,
            SnmpValue::Text(ip.to_string()),
            SnmpValue::Text(code.to_string()),
        ]
    }

    fn bytes(octets: &[u8]) -> SnmpValue {
        SnmpValue::Bytes(octets.to_vec())
    }

    #[test]
    fn type_codes_resolve_to_names() {
        assert_eq!(ArpEntryType::from_code("1"), ArpEntryType::Other);
        assert_eq!(ArpEntryType::from_code("2"), ArpEntryType::Invalid);
        assert_eq!(ArpEntryType::from_code("3"), ArpEntryType::Dynamic);
        assert_eq!(ArpEntryType::from_code("4"), ArpEntryType::Static);
        assert_eq!(ArpEntryType::from_code("5"), ArpEntryType::Unknown);
        assert_eq!(ArpEntryType::from_code(""), ArpEntryType::Unknown);
        assert_eq!(ArpEntryType::from_code("dynamic"), ArpEntryType::Unknown);
        assert_eq!(ArpEntryType::Dynamic.to_string(), "dynamic");
    }

    #[test]
    fn valid_rows_become_entries_in_order() {
        let table = vec![
            row("1", bytes(&[0x94, 0x2a, 0x6f, 0x0c, 0xa9, 0x09]), "192.168.1.10", "3"),
            row("2", SnmpValue::Text("a:2:6f:c:a9:9".to_string()), "192.168.1.11", "4"),
        ];
        let snapshot = parse_arp_table(&[table]);
        assert_eq!(snapshot.entries.len(), 2);
        assert_eq!(snapshot.entries[0].interface_index, "1");
        assert_eq!(snapshot.entries[0].mac_address, "94:2a:6f:0c:a9:09");
        assert_eq!(snapshot.entries[0].entry_type, ArpEntryType::Dynamic);
        assert_eq!(snapshot.entries[1].mac_address, "0a:02:6f:0c:a9:09");
        assert_eq!(snapshot.entries[1].entry_type, ArpEntryType::Static);
    }

    #[test]
    fn placeholder_and_unrecoverable_addresses_are_filtered() {
        let table = vec![
            row("1", bytes(&[0, 0, 0, 0, 0, 0]), "192.168.1.1", "3"),
            row("1", SnmpValue::Text("junk".to_string()), "192.168.1.2", "3"),
            row("1", bytes(&[1, 2, 3, 4, 5, 6]), "192.168.1.3", "3"),
        ];
        let snapshot = parse_arp_table(&[table]);
        assert_eq!(snapshot.entries.len(), 1);
        assert_eq!(snapshot.entries[0].ip_address, "192.168.1.3");
    }

    #[test]
    fn rows_without_an_ip_are_filtered() {
        let table = vec![row("1", bytes(&[1, 2, 3, 4, 5, 6]), "", "3")];
        assert!(parse_arp_table(&[table]).entries.is_empty());
    }

    #[test]
    fn short_rows_are_skipped() {
        let table = vec![
            vec![SnmpValue::Text("1".to_string()), bytes(&[1, 2, 3, 4, 5, 6]), SnmpValue::Text("10.0.0.1".to_string())],
            row("2", bytes(&[1, 2, 3, 4, 5, 6]), "10.0.0.2", "4"),
        ];
        let snapshot = parse_arp_table(&[table]);
        assert_eq!(snapshot.entries.len(), 1);
        assert_eq!(snapshot.entries[0].ip_address, "10.0.0.2");
    }

    #[test]
    fn extra_cells_are_ignored() {
        let mut long_row = row("1", bytes(&[1, 2, 3, 4, 5, 6]), "10.0.0.1", "3");
        long_row.push(SnmpValue::Text("surplus".to_string()));
        let snapshot = parse_arp_table(&[vec![long_row]]);
        assert_eq!(snapshot.entries.len(), 1);
    }

    #[test]
    fn empty_input_yields_an_empty_snapshot() {
        assert!(parse_arp_table(&[]).entries.is_empty());
        assert!(parse_arp_table(&[vec![]]).entries.is_empty());
    }

    #[test]
    fn duplicate_rows_pass_through() {
        let table = vec![
            row("1", bytes(&[1, 2, 3, 4, 5, 6]), "10.0.0.1", "3"),
            row("1", bytes(&[1, 2, 3, 4, 5, 6]), "10.0.0.1", "3"),
        ];
        assert_eq!(parse_arp_table(&[table]).entries.len(), 2);
    }
}
