use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use leash_common::device::{DeviceAddress, DiscoveredDevice, ServiceId};
use leash_common::error::RadioError;
use leash_common::radio::{ConnectOutcome, DeviceConnector, DeviceDiscovery, DiscoveryParams};
use leash_common::session::SessionLock;

pub fn address(raw: &str) -> DeviceAddress {
    DeviceAddress::new(raw).unwrap()
}

pub fn addresses(raw: &[&str]) -> Vec<DeviceAddress> {
    raw.iter().map(|r| address(r)).collect()
}

/// In-memory radio. Devices it "hears" are returned by discovery and answer
/// probes according to the reachable set.
#[derive(Default)]
pub struct MockRadio {
    heard: Vec<DiscoveredDevice>,
    reachable: HashSet<(DeviceAddress, ServiceId)>,
    failing: HashMap<DeviceAddress, ConnectOutcome>,
    discovery_error: Option<RadioError>,
    probes: Mutex<Vec<DeviceAddress>>,
    sweeps: Mutex<Vec<DiscoveryParams>>,
}

impl MockRadio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hears(mut self, device: DiscoveredDevice) -> Self {
        self.heard.push(device);
        self
    }

    /// Probes of `service` on `raw` succeed.
    pub fn reachable(mut self, raw: &str, service: &str) -> Self {
        self.reachable.insert((address(raw), ServiceId::from(service)));
        self
    }

    /// Probes of `raw` fail with `outcome` instead of the default transport error.
    pub fn failing_with(mut self, raw: &str, outcome: ConnectOutcome) -> Self {
        self.failing.insert(address(raw), outcome);
        self
    }

    pub fn discovery_fails(mut self, error: RadioError) -> Self {
        self.discovery_error = Some(error);
        self
    }

    pub fn probed(&self) -> Vec<DeviceAddress> {
        self.probes.lock().unwrap().clone()
    }

    pub fn sweeps(&self) -> Vec<DiscoveryParams> {
        self.sweeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeviceDiscovery for MockRadio {
    async fn discover(
        &self,
        params: &DiscoveryParams,
    ) -> Result<Vec<DiscoveredDevice>, RadioError> {
        self.sweeps.lock().unwrap().push(*params);
        if let Some(error) = &self.discovery_error {
            return Err(error.clone());
        }
        Ok(self.heard.clone())
    }
}

#[async_trait]
impl DeviceConnector for MockRadio {
    async fn connect(&self, address: &DeviceAddress, service: &ServiceId) -> ConnectOutcome {
        self.probes.lock().unwrap().push(address.clone());
        if self.reachable.contains(&(address.clone(), service.clone())) {
            return ConnectOutcome::Connected;
        }
        self.failing
            .get(address)
            .cloned()
            .unwrap_or_else(|| ConnectOutcome::Transport("connection refused".into()))
    }
}

/// Counts lock requests; answers with `succeeds`.
pub struct CountingLock {
    succeeds: bool,
    calls: Mutex<usize>,
}

impl CountingLock {
    pub fn working() -> Self {
        Self {
            succeeds: true,
            calls: Mutex::new(0),
        }
    }

    pub fn refusing() -> Self {
        Self {
            succeeds: false,
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl SessionLock for CountingLock {
    fn lock(&self) -> bool {
        *self.calls.lock().unwrap() += 1;
        self.succeeds
    }
}

/// A scratch directory removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("leash-it-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&path);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
