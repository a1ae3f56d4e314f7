use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use leash_common::device::{DeviceAddress, DiscoveredDevice, ServiceId};
use leash_common::error::RadioError;
use leash_common::radio::{ConnectOutcome, DeviceConnector, DeviceDiscovery, DiscoveryParams};
use leash_common::session::SessionLock;

pub fn addr(s: &str) -> DeviceAddress {
    DeviceAddress::new(s).unwrap()
}

pub fn addrs(list: &[&str]) -> Vec<DeviceAddress> {
    list.iter().map(|s| addr(s)).collect()
}

/// A radio that replays a fixed discovery result and per-device probe outcomes.
pub struct ScriptedRadio {
    visible: Option<Vec<DiscoveredDevice>>,
    outcomes: HashMap<DeviceAddress, ConnectOutcome>,
    pub probes: Mutex<Vec<(DeviceAddress, ServiceId)>>,
    pub sweeps: Mutex<Vec<DiscoveryParams>>,
}

impl ScriptedRadio {
    pub fn seeing(visible: Vec<DiscoveredDevice>) -> Self {
        Self {
            visible: Some(visible),
            outcomes: HashMap::new(),
            probes: Mutex::new(Vec::new()),
            sweeps: Mutex::new(Vec::new()),
        }
    }

    pub fn broken() -> Self {
        Self {
            visible: None,
            ..Self::seeing(Vec::new())
        }
    }

    pub fn answering(mut self, address: &str, outcome: ConnectOutcome) -> Self {
        self.outcomes.insert(addr(address), outcome);
        self
    }

    pub fn probe_count(&self) -> usize {
        self.probes.lock().unwrap().len()
    }
}

#[async_trait]
impl DeviceDiscovery for ScriptedRadio {
    async fn discover(
        &self,
        params: &DiscoveryParams,
    ) -> Result<Vec<DiscoveredDevice>, RadioError> {
        self.sweeps.lock().unwrap().push(*params);
        match &self.visible {
            Some(visible) => Ok(visible.clone()),
            None => Err(RadioError::Unavailable("adapter powered off".into())),
        }
    }
}

#[async_trait]
impl DeviceConnector for ScriptedRadio {
    async fn connect(&self, address: &DeviceAddress, service: &ServiceId) -> ConnectOutcome {
        self.probes
            .lock()
            .unwrap()
            .push((address.clone(), service.clone()));
        self.outcomes
            .get(address)
            .cloned()
            .unwrap_or_else(|| ConnectOutcome::Transport("host is down".into()))
    }
}

#[derive(Default)]
pub struct RecordingLock {
    pub calls: Mutex<usize>,
    pub fails: bool,
}

impl SessionLock for RecordingLock {
    fn lock(&self) -> bool {
        *self.calls.lock().unwrap() += 1;
        !self.fails
    }
}
