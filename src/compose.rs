//! Caller-facing frame operations
//!
//! Takes the operator's raw text fields, validates them one at a time in a
//! fixed order (adapter, destination MAC, source MAC, EtherType, payload,
//! size) and stops at the first bad field. A frame is only handed to the
//! adapter once every field is valid.

use std::fmt;

use tracing::{debug, info};

use crate::backend::{LinkBackend, OpenConfig};
use crate::error::FrameError;
use crate::net::{EtherType, Frame, MacAddress, PayloadFormat};
use crate::sender::send_frame;

/// Text fields for one frame, as typed by the operator.
#[derive(Clone, Copy, Debug)]
pub struct FrameRequest<'a> {
    /// Adapter name as returned by enumeration
    pub adapter: &'a str,
    pub dst_mac: &'a str,
    /// `None` uses the hardware address of `adapter`
    pub src_mac: Option<&'a str>,
    pub ethertype: &'a str,
    pub payload: &'a str,
    pub format: PayloadFormat,
}

/// What a successful send put on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SendReport {
    /// Frame length in bytes (FCS excluded)
    pub bytes: usize,
    pub ethertype: EtherType,
}

impl fmt::Display for SendReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sent OK. Bytes={} EtherType=0x{}", self.bytes, self.ethertype)
    }
}

/// Validate every field and build the frame without touching the adapter.
///
/// The backend is only consulted when the source MAC is left out.
pub fn compose_frame<B: LinkBackend>(
    backend: &B,
    request: &FrameRequest<'_>,
) -> Result<Frame, FrameError> {
    let dst = MacAddress::parse(request.dst_mac).ok_or(FrameError::InvalidDestinationMac)?;
    if dst.is_broadcast() {
        info!("destination {} is the broadcast address", dst);
    } else if dst.is_multicast() {
        info!("destination {} is a multicast group address", dst);
    }

    let src = match request.src_mac {
        Some(text) => MacAddress::parse(text),
        None => {
            let mac = backend.hardware_address(request.adapter);
            debug!("source MAC from {}: {:?}", request.adapter, mac);
            mac
        }
    }
    .ok_or(FrameError::InvalidSourceMac)?;

    let ethertype = EtherType::parse(request.ethertype).ok_or(FrameError::InvalidEtherType)?;

    let payload = request
        .format
        .decode(request.payload)
        .ok_or(FrameError::InvalidHexPayload)?;

    let frame = Frame::build(&dst, &src, ethertype, &payload)?;
    debug!(
        "built frame {} -> {} type 0x{} ({} payload bytes, {} on wire)",
        src,
        dst,
        ethertype,
        payload.len(),
        frame.len()
    );
    Ok(frame)
}

/// Validate, build and transmit one frame.
///
/// # Errors
/// The first failing condition, in validation order. Nothing is sent unless
/// the frame is complete.
pub fn compose_and_send<B: LinkBackend>(
    backend: &B,
    request: &FrameRequest<'_>,
    config: &OpenConfig,
) -> Result<SendReport, FrameError> {
    let request = FrameRequest {
        adapter: request.adapter.trim(),
        ..*request
    };
    if request.adapter.is_empty() {
        return Err(FrameError::NoAdapterSelected);
    }

    let frame = compose_frame(backend, &request)?;
    send_frame(backend, request.adapter, &frame, config)?;

    let report = SendReport {
        bytes: frame.len(),
        ethertype: frame.ethertype(),
    };
    info!("{}", report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line() {
        let report = SendReport {
            bytes: 60,
            ethertype: EtherType(0x88B5),
        };
        assert_eq!(report.to_string(), "Sent OK. Bytes=60 EtherType=0x88B5");
    }
}
