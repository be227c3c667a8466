//! libpcap / Npcap backend
//!
//! Sending raw frames usually needs elevated privileges (root or
//! `CAP_NET_RAW` on Linux, an Npcap install on Windows).

use pcap::{Active, Capture, Device};

use super::{AdapterEntry, LinkBackend, OpenConfig, TxHandle};
use crate::hostmac;
use crate::net::MacAddress;

/// Backend over the system packet capture library.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcapBackend;

/// An activated pcap capture used only for transmission.
///
/// pcap closes the underlying handle when the capture is dropped.
pub struct PcapHandle {
    capture: Capture<Active>,
}

impl TxHandle for PcapHandle {
    fn send(&mut self, frame: &[u8]) -> Result<(), String> {
        self.capture.sendpacket(frame).map_err(|e| e.to_string())
    }
}

impl LinkBackend for PcapBackend {
    type Handle = PcapHandle;

    fn list(&self) -> Result<Vec<AdapterEntry>, String> {
        let devices = Device::list().map_err(|e| e.to_string())?;
        Ok(devices
            .into_iter()
            .map(|device| AdapterEntry {
                name: Some(device.name),
                description: device.desc,
            })
            .collect())
    }

    fn open(&self, name: &str, config: &OpenConfig) -> Result<PcapHandle, String> {
        let capture = Capture::from_device(name)
            .and_then(|inactive| {
                inactive
                    .snaplen(config.snaplen)
                    .promisc(config.promiscuous)
                    .timeout(config.timeout_ms)
                    .open()
            })
            .map_err(|e| e.to_string())?;
        Ok(PcapHandle { capture })
    }

    fn hardware_address(&self, name: &str) -> Option<MacAddress> {
        hostmac::lookup(name)
    }
}
