//! Normalization of ipNetToMediaPhysAddress values.
//!
//! Agents deliver the same physical address in a handful of shapes: the raw
//! six octets, hex with visible spacing ("94 2A 6F 0C A9 09 "), binary
//! re-encoded as one character per byte, or colon notation with missing
//! leading zeros. The normalizer recovers the canonical lowercase form
//! whenever six octets are recoverable and falls back to a sentinel instead
//! of passing garbage downstream.

use crate::snmp::SnmpValue;

/// Returned when no decoding rule recovers six octets.
pub const INVALID_MAC: &str = "invalid-mac";

/// Placeholder agents report for unresolved neighbours.
pub const ALL_ZERO_MAC: &str = "00:00:00:00:00:00";

/// Canonical lowercase `xx:xx:xx:xx:xx:xx` form of a raw physical address
/// cell, or [`INVALID_MAC`] when the input is not recoverable.
pub fn normalize_mac(raw: &SnmpValue) -> String {
    let octets = match raw {
        SnmpValue::Bytes(bytes) => binary_octets(bytes),
        SnmpValue::Text(text) => decode_text(text),
    };
    match octets {
        Some(octets) => format_octets(&octets),
        None => INVALID_MAC.to_string(),
    }
}

/// Ordered decode attempts for text cells; the first one that yields six
/// octets wins.
fn decode_text(text: &str) -> Option<[u8; 6]> {
    spaced_hex_octets(text)
        .or_else(|| char_octets(text))
        .or_else(|| colon_part_octets(text))
}

fn format_octets(octets: &[u8; 6]) -> String {
    octets.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(":")
}

/// An exact six byte value, the encoding a conforming agent uses.
fn binary_octets(bytes: &[u8]) -> Option<[u8; 6]> {
    bytes.try_into().ok()
}

/// Whitespace separated hex tokens like `"94 2A 6F 0C A9 09 "`. There must
/// be six tokens and every token must fit in one octet.
fn spaced_hex_octets(text: &str) -> Option<[u8; 6]> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 6 {
        return None;
    }
    let mut octets = [0u8; 6];
    for (octet, token) in octets.iter_mut().zip(tokens) {
        *octet = u8::from_str_radix(token, 16).ok()?;
    }
    Some(octets)
}

/// Exactly six characters that each fit in one byte, read back as the raw
/// octets. This is binary the transport re-encoded as text; it runs before
/// colon splitting so a six character value containing `:` keeps its bytes.
fn char_octets(text: &str) -> Option<[u8; 6]> {
    if text.chars().count() != 6 {
        return None;
    }
    let mut octets = [0u8; 6];
    for (octet, ch) in octets.iter_mut().zip(text.chars()) {
        *octet = u8::try_from(u32::from(ch)).ok()?;
    }
    Some(octets)
}

/// Colon notation with sloppy parts like `"a:2:6f:c:a9:9"`. Parts are
/// stripped to their hex digits and truncated to the last two; parts
/// without any hex digit count as zero.
fn colon_part_octets(text: &str) -> Option<[u8; 6]> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 6 {
        return None;
    }
    let mut octets = [0u8; 6];
    for (octet, part) in octets.iter_mut().zip(parts) {
        let digits: String = part.chars().filter(|c| c.is_ascii_hexdigit()).collect();
        *octet = match digits.len() {
            0 => 0,
            n => u8::from_str_radix(&digits[n.saturating_sub(2)..], 16).ok()?,
        };
    }
    Some(octets)
}
