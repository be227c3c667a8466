//! ethforge - hand-crafted Ethernet II frames
//!
//! Turns loosely formatted operator input (MAC addresses, an EtherType, a hex
//! or text payload) into a bounds-checked Ethernet II frame and injects it on
//! a local adapter through libpcap/Npcap.
//!
//! The pieces:
//! - `net` parses each field and assembles the frame
//! - `adapter` enumerates injection-capable adapters
//! - `sender` opens an adapter for a single frame and closes it again
//! - `compose` ties them together in the order an operator's form is checked

pub mod adapter;
pub mod backend;
pub mod compose;
pub mod error;
pub mod hostmac;
pub mod net;
pub mod sender;

pub use adapter::{list_adapters, AdapterDescriptor, AdapterListing};
pub use backend::{LinkBackend, OpenConfig, PcapBackend, TxHandle, DEFAULT_OPEN_CONFIG};
pub use compose::{compose_and_send, compose_frame, FrameRequest, SendReport};
pub use error::FrameError;
pub use net::{EtherType, Frame, MacAddress, PayloadFormat};
