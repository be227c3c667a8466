//! Link-layer field parsing and frame construction
//!
//! - MAC address parsing and formatting
//! - EtherType parsing
//! - Payload parsing (hex text or raw text)
//! - Ethernet II frame assembly with minimum-size padding

pub mod ethernet;
pub mod ethertype;
pub mod mac;
pub mod payload;

pub use ethernet::Frame;
pub use ethertype::EtherType;
pub use mac::MacAddress;
pub use payload::PayloadFormat;

/// Parse a base-16 number made only of hex digits.
///
/// Signs, radix prefixes and embedded whitespace are rejected; an empty
/// string is not a number.
pub(crate) fn parse_hex_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(s, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_digits() {
        assert_eq!(parse_hex_digits("ff"), Some(0xFF));
        assert_eq!(parse_hex_digits("88B5"), Some(0x88B5));
        assert_eq!(parse_hex_digits(""), None);
        assert_eq!(parse_hex_digits("+f"), None);
        assert_eq!(parse_hex_digits("0x1"), None);
        assert_eq!(parse_hex_digits("1 2"), None);
        // Overflows u32
        assert_eq!(parse_hex_digits("123456789"), None);
    }
}
