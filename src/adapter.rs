//! Adapter enumeration
//!
//! Lists the adapters a frame can be injected on. Every call goes back to the
//! backend; adapters come and go (USB NICs, VPN taps) so nothing is cached.

use tracing::{debug, info};

use crate::backend::{AdapterEntry, LinkBackend};
use crate::error::FrameError;

/// Shown when the backend has no description for an adapter
pub const NO_DESCRIPTION: &str = "No description";

/// An adapter the operator can pick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdapterDescriptor {
    /// Name handed back to the backend to open the adapter
    pub name: String,
    pub description: String,
}

impl AdapterDescriptor {
    fn from_entry(entry: AdapterEntry) -> Self {
        let description = entry
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());
        AdapterDescriptor {
            name: entry.name.unwrap_or_default(),
            description,
        }
    }

    /// `"<description>  [<name>]"`
    pub fn label(&self) -> String {
        format!("{}  [{}]", self.description, self.name)
    }
}

/// Result of one enumeration request.
///
/// A listing failure is not an error for the caller: it gets an empty list and
/// the reason in `diagnostic`.
#[derive(Debug, Default)]
pub struct AdapterListing {
    pub adapters: Vec<AdapterDescriptor>,
    pub diagnostic: Option<FrameError>,
}

impl AdapterListing {
    /// Display label and identifier pairs, in backend order
    pub fn labels(&self) -> Vec<(String, String)> {
        self.adapters
            .iter()
            .map(|adapter| (adapter.label(), adapter.name.clone()))
            .collect()
    }
}

/// Ask the backend for its adapters, preserving the order it reports.
pub fn list_adapters<B: LinkBackend>(backend: &B) -> AdapterListing {
    match backend.list() {
        Ok(entries) => {
            let adapters: Vec<AdapterDescriptor> =
                entries.into_iter().map(AdapterDescriptor::from_entry).collect();
            info!("Adapters refreshed. Found: {}", adapters.len());
            AdapterListing {
                adapters,
                diagnostic: None,
            }
        }
        Err(diag) => {
            debug!("adapter enumeration failed: {}", diag);
            AdapterListing {
                adapters: Vec::new(),
                diagnostic: Some(FrameError::AdapterEnumerationFailed(diag)),
            }
        }
    }
}
