//! MAC (hardware) addresses

use std::fmt;

use super::parse_hex_digits;

/// Broadcast MAC address
pub const BROADCAST_MAC: MacAddress = MacAddress([0xFF; 6]);

/// A 6-byte hardware address.
///
/// Only ever created complete: parsing yields all six bytes or nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// Parse `AA:BB:CC:DD:EE:FF` style text.
    ///
    /// Surrounding whitespace is trimmed. Exactly six colon-separated groups
    /// are required; each group is base-16 and must be in 0..=255. Group order
    /// is byte order.
    pub fn parse(text: &str) -> Option<Self> {
        let groups: Vec<&str> = text.trim().split(':').collect();
        if groups.len() != 6 {
            return None;
        }

        let mut bytes = [0u8; 6];
        for (slot, group) in bytes.iter_mut().zip(groups) {
            let value = parse_hex_digits(group.trim())?;
            *slot = u8::try_from(value).ok()?;
        }
        Some(MacAddress(bytes))
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    pub fn is_broadcast(&self) -> bool {
        *self == BROADCAST_MAC
    }

    /// Group bit set in the first octet
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }
}

/// Uppercase, zero-padded, colon separated.
impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            m[0], m[1], m[2], m[3], m[4], m[5]
        )
    }
}
