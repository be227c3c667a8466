//! Failure taxonomy for frame authoring and injection.
//!
//! Every parser, the frame builder, and the adapter operations report through
//! `FrameError`. None of these conditions are fatal; the caller turns each one
//! into a single human-readable line and moves on.

use std::fmt;

/// Every way composing or sending a frame can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// No adapter identifier was supplied
    NoAdapterSelected,
    /// Destination MAC has the wrong group count, a non-hex group, or a group > 0xFF
    InvalidDestinationMac,
    /// Source MAC has the wrong group count, a non-hex group, or a group > 0xFF
    InvalidSourceMac,
    /// EtherType is not hex after prefix removal, or exceeds 0xFFFF
    InvalidEtherType,
    /// Hex payload has odd length after whitespace removal, or a non-hex pair
    InvalidHexPayload,
    /// Payload exceeds the Ethernet MTU (carries the offending length)
    PayloadTooLarge(usize),
    /// The adapter-listing primitive failed
    AdapterEnumerationFailed(String),
    /// The adapter handle could not be opened
    AdapterOpenFailed(String),
    /// The handle opened but the transmit call failed
    FrameSendFailed(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::NoAdapterSelected => write!(f, "No adapter selected."),
            FrameError::InvalidDestinationMac => write!(f, "Invalid Dst MAC."),
            FrameError::InvalidSourceMac => write!(f, "Invalid Src MAC."),
            FrameError::InvalidEtherType => write!(f, "Invalid EtherType."),
            FrameError::InvalidHexPayload => write!(f, "Invalid HEX payload."),
            FrameError::PayloadTooLarge(len) => {
                write!(f, "Payload > 1500 not allowed ({} bytes).", len)
            }
            FrameError::AdapterEnumerationFailed(diag) => {
                write!(f, "adapter enumeration failed: {}", diag)
            }
            FrameError::AdapterOpenFailed(diag) => write!(f, "adapter open failed: {}", diag),
            FrameError::FrameSendFailed(diag) => write!(f, "frame send failed: {}", diag),
        }
    }
}

impl std::error::Error for FrameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_single_line() {
        let errors = [
            FrameError::NoAdapterSelected,
            FrameError::InvalidDestinationMac,
            FrameError::PayloadTooLarge(2000),
            FrameError::AdapterEnumerationFailed("no permission".into()),
        ];
        for err in &errors {
            let line = err.to_string();
            assert!(!line.is_empty());
            assert!(!line.contains('\n'), "multi-line message: {}", line);
        }
        assert_eq!(
            FrameError::PayloadTooLarge(2000).to_string(),
            "Payload > 1500 not allowed (2000 bytes)."
        );
    }
}
