use async_trait::async_trait;
use leash_common::device::{DeviceAddress, DiscoveredDevice, ServiceId};
use leash_common::error::RadioError;
use leash_common::radio::{ConnectOutcome, DeviceConnector, DeviceDiscovery, DiscoveryParams};

/// A radio that could not be opened. Every call fails with the original error.
pub struct OfflineRadio {
    error: RadioError,
}

impl OfflineRadio {
    pub fn new(error: RadioError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl DeviceDiscovery for OfflineRadio {
    async fn discover(
        &self,
        _params: &DiscoveryParams,
    ) -> Result<Vec<DiscoveredDevice>, RadioError> {
        Err(self.error.clone())
    }
}

#[async_trait]
impl DeviceConnector for OfflineRadio {
    async fn connect(&self, _address: &DeviceAddress, _service: &ServiceId) -> ConnectOutcome {
        ConnectOutcome::Other(self.error.to_string())
    }
}
