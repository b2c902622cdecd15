use std::borrow::Cow;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One cell of a fetched SNMP table. The transport hands octet strings that
/// are not valid UTF-8 over as raw bytes; every other value arrives as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnmpValue {
    Text(String),
    Bytes(Vec<u8>),
}

impl SnmpValue {
    /// The cell as text. Raw bytes degrade through lossy UTF-8 so columns
    /// that are text on a conforming agent never produce a decoding error.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            SnmpValue::Text(text) => Cow::Borrowed(text),
            SnmpValue::Bytes(bytes) => String::from_utf8_lossy(bytes),
        }
    }
}

/// One row of a fetched table, cells in the order the section's columns were requested.
pub type SnmpRow = Vec<SnmpValue>;

/// All rows fetched for one subtree.
pub type SnmpTable = Vec<SnmpRow>;

/// What the poller has to fetch for one section. Purely declarative; the
/// crate itself never speaks SNMP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnmpSection {
    pub name: &'static str,
    /// OID pattern whose presence marks a device as having this section.
    pub detect: &'static str,
    /// Table entry base the column sub-identifiers are relative to.
    pub base: &'static str,
    pub columns: &'static [&'static str],
}

// https://www.rfc-editor.org/rfc/rfc1213
/// ipNetToMediaTable: ifIndex, PhysAddress, NetAddress and Type per entry.
pub const ARP_TABLE_SECTION: SnmpSection = SnmpSection {
    name: "arp_table",
    detect: ".1.3.6.1.2.1.4.22.1.1.*",
    base: ".1.3.6.1.2.1.4.22.1",
    columns: &["1", "2", "3", "4"],
};

/// Read a table dump written by the poller: a JSON array with one table per
/// fetched subtree, each table an array of rows of cells.
pub async fn load_table_dump(path: &str) -> Result<Vec<SnmpTable>> {
    let raw = tokio::fs::read_to_string(path).await.with_context(|| format!("failed to read table dump {}", path))?;
    let tables = serde_json::from_str(&raw).with_context(|| format!("failed to parse table dump {}", path))?;
    Ok(tables)
}
