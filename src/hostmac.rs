//! Hardware address lookup for local adapters
//!
//! Used to fill in the source MAC when the operator leaves it out.

use network_interface::{NetworkInterface, NetworkInterfaceConfig};
use tracing::{debug, warn};

use crate::net::MacAddress;

/// Npcap device names are this prefix followed by the interface GUID
const NPCAP_DEVICE_PREFIX: &str = r"\Device\NPF_";

/// Look up the MAC address of the adapter the capture layer calls `adapter`.
pub fn lookup(adapter: &str) -> Option<MacAddress> {
    let interfaces = match NetworkInterface::show() {
        Ok(interfaces) => interfaces,
        Err(e) => {
            warn!("interface table unavailable: {}", e);
            return None;
        }
    };

    let mac = find_mac(
        interfaces
            .iter()
            .map(|iface| (iface.name.as_str(), iface.mac_addr.as_deref())),
        adapter,
    );
    debug!("hardware address of {}: {:?}", adapter, mac);
    mac
}

/// Pick the MAC of `adapter` out of `(interface name, mac text)` pairs.
///
/// Npcap reports `\Device\NPF_{GUID}` where the OS knows `{GUID}`, so that
/// exact decoration is also accepted. No other partial match is: an adapter
/// the OS table doesn't list has no known address.
pub fn find_mac<'a, I>(interfaces: I, adapter: &str) -> Option<MacAddress>
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let candidates: Vec<(&str, Option<&str>)> = interfaces
        .into_iter()
        .filter(|(name, _)| !name.is_empty())
        .collect();

    let exact = candidates.iter().find(|(name, _)| *name == adapter);
    let chosen = exact.or_else(|| {
        let guid = adapter.strip_prefix(NPCAP_DEVICE_PREFIX)?;
        candidates.iter().find(|(name, _)| *name == guid)
    })?;

    chosen.1.and_then(MacAddress::parse)
}
