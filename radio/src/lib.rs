//! Radio adapters implementing the discovery and connect capabilities.
//!
//! On Linux the host's Bluetooth stack is reached through BlueZ ([`BluezRadio`]).
//! Everywhere else, and whenever the adapter cannot be opened, an [`OfflineRadio`]
//! stands in so that scans still complete, with every device out of range.

use std::time::Duration;

use leash_common::error::RadioError;
use leash_common::radio::Radio;
use tracing::warn;

pub mod admission;
mod offline;

#[cfg(target_os = "linux")]
mod bluez;

#[cfg(target_os = "linux")]
pub use bluez::BluezRadio;
pub use offline::OfflineRadio;

#[derive(Debug, Clone, Copy)]
pub struct RadioSettings {
    /// How long one discovery sweep may listen for devices.
    pub sweep: Duration,
    /// How long one connection probe may take.
    pub probe_timeout: Duration,
}

/// Opens the platform radio.
pub async fn open(settings: RadioSettings) -> Result<Box<dyn Radio>, RadioError> {
    #[cfg(target_os = "linux")]
    {
        Ok(Box::new(BluezRadio::open(settings).await?))
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = settings;
        Err(RadioError::Unsupported)
    }
}

/// Opens the platform radio, or an [`OfflineRadio`] replaying the failure.
pub async fn open_or_offline(settings: RadioSettings) -> Box<dyn Radio> {
    match open(settings).await {
        Ok(radio) => radio,
        Err(e) => {
            warn!("Radio unavailable: {e}");
            Box::new(OfflineRadio::new(e))
        }
    }
}
