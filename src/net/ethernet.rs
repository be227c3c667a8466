//! Ethernet frame construction
//!
//! Implements the Ethernet II frame format: destination MAC, source MAC,
//! big-endian EtherType, then 46..=1500 bytes of payload. The FCS is left to
//! the adapter.

use std::fmt;

use super::{EtherType, MacAddress};
use crate::error::FrameError;

/// Ethernet frame header size (without VLAN tag)
pub const ETHERNET_HEADER_SIZE: usize = 14;

/// Minimum payload size; shorter payloads are zero-padded
pub const ETHERNET_MIN_PAYLOAD: usize = 46;

/// Maximum Ethernet payload size (MTU), inclusive
pub const ETHERNET_MTU: usize = 1500;

/// Minimum Ethernet frame size (excluding FCS)
pub const ETHERNET_MIN_SIZE: usize = ETHERNET_HEADER_SIZE + ETHERNET_MIN_PAYLOAD;

/// Maximum Ethernet frame size (excluding FCS)
pub const ETHERNET_MAX_SIZE: usize = ETHERNET_HEADER_SIZE + ETHERNET_MTU;

/// A complete Ethernet II frame, ready to be put on the wire.
///
/// Length is always within `ETHERNET_MIN_SIZE..=ETHERNET_MAX_SIZE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
    ethertype: EtherType,
}

impl Frame {
    /// Build an Ethernet frame
    ///
    /// Payloads shorter than 46 bytes are padded with zeros. Payloads longer
    /// than 1500 bytes are rejected, never truncated.
    pub fn build(
        dst_mac: &MacAddress,
        src_mac: &MacAddress,
        ethertype: EtherType,
        payload: &[u8],
    ) -> Result<Self, FrameError> {
        if payload.len() > ETHERNET_MTU {
            return Err(FrameError::PayloadTooLarge(payload.len()));
        }

        let padded_len = payload.len().max(ETHERNET_MIN_PAYLOAD);
        let mut bytes = Vec::with_capacity(ETHERNET_HEADER_SIZE + padded_len);

        // Destination MAC
        bytes.extend_from_slice(&dst_mac.octets());
        // Source MAC
        bytes.extend_from_slice(&src_mac.octets());
        // EtherType
        bytes.extend_from_slice(&ethertype.to_be_bytes());
        // Payload
        bytes.extend_from_slice(payload);

        // Pad to minimum frame size if needed
        bytes.resize(ETHERNET_HEADER_SIZE + padded_len, 0);

        Ok(Frame { bytes, ethertype })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn ethertype(&self) -> EtherType {
        self.ethertype
    }

    pub fn dst_mac(&self) -> MacAddress {
        MacAddress(self.header_mac(0))
    }

    pub fn src_mac(&self) -> MacAddress {
        MacAddress(self.header_mac(6))
    }

    /// Payload including any padding
    pub fn payload(&self) -> &[u8] {
        &self.bytes[ETHERNET_HEADER_SIZE..]
    }

    fn header_mac(&self, offset: usize) -> [u8; 6] {
        let mut mac = [0u8; 6];
        mac.copy_from_slice(&self.bytes[offset..offset + 6]);
        mac
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Hex dump, 16 bytes per line with offsets.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chunk) in self.bytes.chunks(16).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:04x}:", i * 16)?;
            for byte in chunk {
                write!(f, " {:02x}", byte)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DST: MacAddress = MacAddress([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    const SRC: MacAddress = MacAddress([0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);

    #[test]
    fn test_short_payload_is_padded() {
        let frame = Frame::build(&DST, &SRC, EtherType(0x88B5), &[0x42; 10]).unwrap();
        assert_eq!(frame.len(), ETHERNET_MIN_SIZE);
        assert_eq!(frame.payload().len(), ETHERNET_MIN_PAYLOAD);
        assert_eq!(&frame.payload()[..10], &[0x42; 10]);
        assert!(frame.payload()[10..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_header_layout() {
        let frame = Frame::build(&DST, &SRC, EtherType(0x88B5), &[0xDE, 0xAD]).unwrap();
        let bytes = frame.as_bytes();
        assert_eq!(&bytes[0..6], &DST.octets());
        assert_eq!(&bytes[6..12], &SRC.octets());
        assert_eq!(&bytes[12..14], &[0x88, 0xB5]);
        assert_eq!(&bytes[14..16], &[0xDE, 0xAD]);
        assert_eq!(frame.dst_mac(), DST);
        assert_eq!(frame.src_mac(), SRC);
        assert_eq!(frame.ethertype(), EtherType(0x88B5));
    }

    #[test]
    fn test_mtu_is_inclusive() {
        let frame = Frame::build(&DST, &SRC, EtherType::IPV4, &[0u8; ETHERNET_MTU]).unwrap();
        assert_eq!(frame.len(), ETHERNET_MAX_SIZE);

        let exact_min = Frame::build(&DST, &SRC, EtherType::IPV4, &[1u8; 46]).unwrap();
        assert_eq!(exact_min.len(), ETHERNET_MIN_SIZE);
    }

    #[test]
    fn test_oversized_payload_rejected() {
        let result = Frame::build(&DST, &SRC, EtherType::IPV4, &[0u8; ETHERNET_MTU + 1]);
        assert_eq!(result, Err(FrameError::PayloadTooLarge(1501)));
    }

    #[test]
    fn test_hex_dump() {
        let frame = Frame::build(&DST, &SRC, EtherType(0x0800), &[]).unwrap();
        let dump = frame.to_string();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "0000: aa bb cc dd ee ff 11 22 33 44 55 66 08 00 00 00"
        );
        assert!(lines[3].starts_with("0030:"));
    }
}
