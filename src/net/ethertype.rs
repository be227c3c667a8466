//! EtherType field

use std::fmt;

use super::parse_hex_digits;

/// 16-bit protocol identifier carried after the MAC addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EtherType(pub u16);

impl EtherType {
    pub const IPV4: EtherType = EtherType(0x0800);
    pub const ARP: EtherType = EtherType(0x0806);
    pub const IPV6: EtherType = EtherType(0x86DD);

    /// Parse hex text such as `0x88B5`, `0X88b5` or `88b5`.
    ///
    /// Whitespace around the value is trimmed and a single leading `0x` is
    /// removed (any case). Values above 0xFFFF are rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let s = text.trim();
        let digits = match s.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("0x") => &s[2..],
            _ => s,
        };
        let value = parse_hex_digits(digits)?;
        u16::try_from(value).ok().map(EtherType)
    }

    /// Wire encoding, always big-endian.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// Uppercase hex without prefix or padding (`800`, `88B5`).
impl fmt::Display for EtherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}
