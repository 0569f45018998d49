//! Shared 32-bit representation for addresses and masks.

use itertools::Itertools;
use std::fmt;

/// Raw IPv4 value, most significant octet first.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct RawValue(pub(crate) u32);

impl RawValue {
    pub(crate) fn octets(self) -> [u8; 4] {
        [
            (self.0 >> 24) as u8,
            ((self.0 & 0x00FF_0000) >> 16) as u8,
            ((self.0 & 0x0000_FF00) >> 8) as u8,
            (self.0 & 0x0000_00FF) as u8,
        ]
    }

    pub(crate) fn to_hex_string(self) -> String {
        format!("0x{:08X}", self.0)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.octets().iter().join("."))
    }
}

/// Convert a dotted string to its 32-bit value.
///
/// The caller has already checked the overall shape, so this only trims
/// whitespace and converts the four segments. Returns `None` when a segment
/// is missing or does not fit in an octet.
pub(crate) fn parse_octets(text: &str) -> Option<RawValue> {
    let mut octets = [0u8; 4];
    let mut segments = text.trim().split('.');

    for octet in octets.iter_mut() {
        *octet = segments.next()?.parse::<u8>().ok()?;
    }
    if segments.next().is_some() {
        return None;
    }

    Some(RawValue(u32::from_be_bytes(octets)))
}

/// Common view over anything stored as a 32-bit IPv4 value.
pub trait Ipv4Value {
    /// The stored 32-bit value.
    fn value(&self) -> u32;

    /// The four octets, first dotted segment first.
    fn octets(&self) -> [u8; 4] {
        RawValue(self.value()).octets()
    }

    /// Format as `0xHHHHHHHH`.
    fn to_hex_string(&self) -> String {
        RawValue(self.value()).to_hex_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octets() {
        assert_eq!(RawValue(0xBFA80406).octets(), [191, 168, 4, 6]);
        assert_eq!(RawValue(0).octets(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_display_and_hex() {
        assert_eq!(RawValue(1).to_string(), "0.0.0.1");
        assert_eq!(RawValue(u32::MAX).to_string(), "255.255.255.255");
        assert_eq!(RawValue(0x0A000001).to_hex_string(), "0x0A000001");
        assert_eq!(RawValue(0xFF).to_hex_string(), "0x000000FF");
    }

    #[test]
    fn test_parse_octets() {
        assert_eq!(parse_octets(" 10.0.0.1\n"), Some(RawValue(0x0A000001)));
        assert_eq!(parse_octets("10.0.0"), None);
        assert_eq!(parse_octets("10.0.0.1.2"), None);
        assert_eq!(parse_octets("10.0.0.256"), None);
        assert_eq!(parse_octets("10.a.0.1"), None);
    }
}
