use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::address::DeviceAddress;

/// Opaque handle of a service advertised by a device (a UUID for Bluetooth).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceId(String);

impl ServiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServiceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ServiceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named device. Identity is the address alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceInfo {
    name: String,
    address: DeviceAddress,
}

impl DeviceInfo {
    /// A blank `name` falls back to the address text.
    pub fn new(name: impl Into<String>, address: DeviceAddress) -> Self {
        let name: String = name.into();
        let name = match name.trim() {
            "" => address.to_string(),
            trimmed => trimmed.to_string(),
        };
        Self { name, address }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }
}

impl PartialEq for DeviceInfo {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for DeviceInfo {}

impl Hash for DeviceInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

/// One entry of a discovery pass, as reported by the radio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDevice {
    pub address: DeviceAddress,
    pub name: Option<String>,
    /// The stack already holds a live connection to this device.
    pub connected: bool,
    pub services: Vec<ServiceId>,
}

impl DiscoveredDevice {
    pub fn new(address: DeviceAddress) -> Self {
        Self {
            address,
            name: None,
            connected: false,
            services: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    pub fn with_service(mut self, service: impl Into<ServiceId>) -> Self {
        self.services.push(service.into());
        self
    }

    /// The probe target. No other selection policy exists.
    pub fn first_service(&self) -> Option<&ServiceId> {
        self.services.first()
    }

    pub fn to_info(&self) -> DeviceInfo {
        DeviceInfo::new(self.name.clone().unwrap_or_default(), self.address.clone())
    }
}
