//! Packet injection backend abstraction
//!
//! The frame tooling never talks to a capture library directly. It needs two
//! primitives: list the adapters the OS exposes, and open a transmit handle on
//! one of them. `LinkBackend` captures that contract so the production
//! libpcap/Npcap binding and in-memory test doubles are interchangeable.

pub mod libpcap;

use crate::net::MacAddress;

pub use self::libpcap::{PcapBackend, PcapHandle};

/// One adapter as reported by the listing primitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdapterEntry {
    /// Native adapter name, used to open it (e.g. `eth0`, `\Device\NPF_{...}`)
    pub name: Option<String>,
    /// Human-readable description, if the platform provides one
    pub description: Option<String>,
}

/// Parameters for opening a transmit handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenConfig {
    /// Snapshot length requested from the capture layer
    pub snaplen: i32,
    /// Put the adapter in promiscuous mode (not needed to send, kept for parity
    /// with capture tools)
    pub promiscuous: bool,
    /// Bound on how long opening the adapter may block, in milliseconds
    pub timeout_ms: i32,
}

/// Defaults used when opening an adapter for a single send
pub const DEFAULT_OPEN_CONFIG: OpenConfig = OpenConfig {
    snaplen: 65536,
    promiscuous: true,
    timeout_ms: 1000,
};

impl Default for OpenConfig {
    fn default() -> Self {
        DEFAULT_OPEN_CONFIG
    }
}

/// An open adapter that can transmit raw frames.
///
/// Dropping the handle closes it.
pub trait TxHandle {
    /// Put `frame` on the wire unmodified.
    ///
    /// # Errors
    /// Returns the backend's diagnostic text if the transmit call fails.
    fn send(&mut self, frame: &[u8]) -> Result<(), String>;
}

/// Adapter listing and opening, as provided by a packet-injection library.
pub trait LinkBackend {
    type Handle: TxHandle;

    /// List adapters in the order the OS reports them.
    ///
    /// # Errors
    /// Returns the backend's diagnostic text if enumeration fails.
    fn list(&self) -> Result<Vec<AdapterEntry>, String>;

    /// Open a transmit handle on the adapter called `name`.
    ///
    /// # Errors
    /// Returns the backend's diagnostic text if the adapter cannot be opened.
    fn open(&self, name: &str, config: &OpenConfig) -> Result<Self::Handle, String>;

    /// Hardware address of the adapter called `name`, if it can be found.
    fn hardware_address(&self, _name: &str) -> Option<MacAddress> {
        None
    }
}
