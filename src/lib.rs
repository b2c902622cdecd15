//! ARP cache inventory for SNMP managed devices: decoding the
//! ipNetToMediaTable, normalizing physical addresses and emitting
//! inventory records plus Prometheus metrics.

pub mod arp_table;
pub mod collector;
pub mod inventory;
pub mod mac;
pub mod snmp;
pub mod views;
