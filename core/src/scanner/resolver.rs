use std::collections::{HashMap, HashSet};

use leash_common::device::{ConnectionResult, DeviceAddress, DiscoveredDevice};
use leash_common::error::{ScanError, device_cap};
use leash_common::radio::{ConnectOutcome, DiscoveryParams, Radio};
use tracing::{debug, warn};

/// In-range verdict per address of interest.
pub type RangeMap = HashMap<DeviceAddress, bool>;

/// Decides in range / out of range for a set of addresses.
///
/// Performs at most one discovery pass and at most one connection attempt per
/// visible device of interest. Devices the radio already holds a connection to are
/// taken as present without probing.
pub struct RangeResolver<'a> {
    radio: &'a dyn Radio,
}

impl<'a> RangeResolver<'a> {
    pub fn new(radio: &'a dyn Radio) -> Self {
        Self { radio }
    }

    /// Resolves every address in `addresses`.
    ///
    /// Fails with [`ScanError::InvalidArgument`] if `max_devices <= 0` and with
    /// [`ScanError::Radio`] if the discovery pass itself fails. Probe failures never
    /// fail the call; they leave the device out of range.
    pub async fn resolve(
        &self,
        max_devices: i64,
        addresses: &[DeviceAddress],
    ) -> Result<RangeMap, ScanError> {
        let cap: usize = device_cap(max_devices)?;

        let mut scanned: HashMap<DeviceAddress, ConnectionResult> = addresses
            .iter()
            .map(|address| (address.clone(), ConnectionResult::new(address.clone())))
            .collect();

        let visible: Vec<DiscoveredDevice> =
            self.radio.discover(&DiscoveryParams::fresh_sweep(cap)).await?;
        debug!("Discovery pass returned {} device(s)", visible.len());

        let mut probed: HashSet<&DeviceAddress> = HashSet::new();
        for device in visible.iter().take(cap) {
            let Some(result) = scanned.get_mut(&device.address) else {
                continue;
            };
            if result.is_in_range() {
                continue;
            }

            if device.connected {
                debug!("{} is already connected", device.address);
                result.mark_in_range();
                continue;
            }

            // One attempt per device, whatever it returned.
            if !probed.insert(&device.address) {
                continue;
            }

            let outcome: ConnectOutcome = self.probe(device).await;
            if outcome.is_connected() {
                debug!("{} answered the probe", device.address);
                result.mark_in_range();
            } else {
                warn!("{} did not answer the probe: {outcome}", device.address);
            }
        }

        Ok(scanned
            .into_iter()
            .map(|(address, result)| (address, result.is_in_range()))
            .collect())
    }

    async fn probe(&self, device: &DiscoveredDevice) -> ConnectOutcome {
        match device.first_service() {
            Some(service) => self.radio.connect(&device.address, service).await,
            None => ConnectOutcome::Other("device advertises no services".to_string()),
        }
    }
}
