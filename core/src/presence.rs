//! # Presence Service
//!
//! Implements the use cases the shell drives:
//! * [`PresenceService::discover_all`]: list everything visible, to pick devices of interest.
//! * [`PresenceService::try_scan`]: the guarded scan. Only caller mistakes escape; any
//!   radio failure turns into "every device out of range".
//! * [`PresenceService::check`]: scan, decide, and lock if anything is missing.

use leash_common::device::{ConnectionResult, DeviceAddress, DeviceInfo, DiscoveredDevice};
use leash_common::error::{ArgumentError, RadioError, ScanError, device_cap};
use leash_common::radio::{DiscoveryParams, Radio};
use leash_common::session::SessionLock;
use tracing::warn;

use crate::scanner::{self, RangeMap, RangeResolver};
use crate::verdict::{self, LockAction, Verdict};

/// Discovery breadth used when the caller does not pick one: every device in range.
pub const UNBOUNDED_DEVICES: i64 = i64::MAX;

pub struct PresenceService {
    radio: Box<dyn Radio>,
}

/// Everything a presence check produced.
#[derive(Debug)]
pub struct CheckReport {
    pub results: Vec<ConnectionResult>,
    pub verdict: Verdict,
    pub action: LockAction,
}

impl PresenceService {
    pub fn new(radio: Box<dyn Radio>) -> Self {
        Self { radio }
    }

    /// Runs an unbounded discovery sweep. Radio failures propagate.
    pub async fn discover_all(&self) -> Result<Vec<DeviceInfo>, RadioError> {
        let devices: Vec<DiscoveredDevice> =
            self.radio.discover(&DiscoveryParams::unbounded()).await?;
        Ok(devices.iter().map(DiscoveredDevice::to_info).collect())
    }

    /// Unguarded range resolution, see [`RangeResolver::resolve`].
    pub async fn resolve(
        &self,
        max_devices: i64,
        addresses: &[DeviceAddress],
    ) -> Result<RangeMap, ScanError> {
        RangeResolver::new(&*self.radio)
            .resolve(max_devices, addresses)
            .await
    }

    /// Scans for `addresses` and never fails because of the environment.
    ///
    /// Returns one result per distinct input address, in input order. If the scan
    /// itself fails every address is reported out of range.
    pub async fn try_scan<I>(
        &self,
        max_devices: i64,
        addresses: I,
    ) -> Result<Vec<ConnectionResult>, ArgumentError>
    where
        I: IntoIterator<Item = DeviceAddress>,
    {
        device_cap(max_devices)?;
        let addresses: Vec<DeviceAddress> = scanner::unique_addresses(addresses);

        match self.resolve(max_devices, &addresses).await {
            Ok(map) => Ok(addresses
                .into_iter()
                .map(|address| {
                    let in_range: bool = map.get(&address).copied().unwrap_or(false);
                    ConnectionResult::from_verdict(address, in_range)
                })
                .collect()),
            Err(ScanError::InvalidArgument(e)) => Err(e),
            Err(ScanError::Radio(e)) => {
                warn!("Scan failed, treating every device as out of range: {e}");
                Ok(addresses.into_iter().map(ConnectionResult::new).collect())
            }
        }
    }

    /// Scans `addresses`, then locks through `lock` unless everything is present.
    ///
    /// `max_devices` defaults to [`UNBOUNDED_DEVICES`].
    pub async fn check(
        &self,
        max_devices: Option<i64>,
        addresses: Vec<DeviceAddress>,
        lock: &dyn SessionLock,
        dry_run: bool,
    ) -> Result<CheckReport, ArgumentError> {
        let results: Vec<ConnectionResult> = self
            .try_scan(max_devices.unwrap_or(UNBOUNDED_DEVICES), addresses)
            .await?;
        let verdict: Verdict = Verdict::from_results(&results);
        let action: LockAction = verdict::enforce(&verdict, lock, dry_run);

        Ok(CheckReport {
            results,
            verdict,
            action,
        })
    }

    /// Treats everything currently visible as trusted for this one check.
    ///
    /// The discovery breadth is the number of devices found. Nothing visible means
    /// nothing to check.
    pub async fn check_all_visible(
        &self,
        lock: &dyn SessionLock,
        dry_run: bool,
    ) -> anyhow::Result<CheckReport> {
        let visible: Vec<DeviceInfo> = self.discover_all().await?;
        let addresses: Vec<DeviceAddress> =
            scanner::unique_addresses(visible.iter().map(|d| d.address().clone()));

        if addresses.is_empty() {
            warn!("No devices visible, nothing to check");
            return Ok(CheckReport {
                results: Vec::new(),
                verdict: Verdict::AllPresent,
                action: LockAction::NotNeeded,
            });
        }

        let cap = i64::try_from(addresses.len()).unwrap_or(UNBOUNDED_DEVICES);
        Ok(self.check(Some(cap), addresses, lock, dry_run).await?)
    }
}
