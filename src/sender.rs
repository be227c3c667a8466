//! Frame transmission
//!
//! A handle is opened for exactly one frame and closed before returning,
//! whether the send succeeded or not. Nothing is held between calls.

use tracing::debug;

use crate::backend::{LinkBackend, OpenConfig, TxHandle};
use crate::error::FrameError;
use crate::net::Frame;

/// Open `adapter`, transmit `frame` as-is, close the adapter.
///
/// # Errors
/// `AdapterOpenFailed` if the handle cannot be opened, `FrameSendFailed` if it
/// opened but the transmit call failed.
pub fn send_frame<B: LinkBackend>(
    backend: &B,
    adapter: &str,
    frame: &Frame,
    config: &OpenConfig,
) -> Result<(), FrameError> {
    let mut handle = backend
        .open(adapter, config)
        .map_err(FrameError::AdapterOpenFailed)?;
    debug!(
        "opened {} (snaplen={}, promisc={}, timeout={}ms)",
        adapter, config.snaplen, config.promiscuous, config.timeout_ms
    );

    let result = handle
        .send(frame.as_bytes())
        .map_err(FrameError::FrameSendFailed);

    drop(handle);
    debug!("closed {}", adapter);

    result
}
