//! # Trusted devices
//!
//! The allow-list of devices whose absence should lock the session, and the
//! repository contract used to persist it.

use serde::{Deserialize, Serialize};

use crate::device::{DeviceAddress, DeviceInfo};

/// Insertion-ordered set of trusted devices, unique by address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedDevices {
    #[serde(default, rename = "device")]
    devices: Vec<DeviceInfo>,
}

impl TrustedDevices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `info`, or renames the existing entry with the same address.
    ///
    /// Returns `true` if the address was not trusted before.
    pub fn add(&mut self, info: DeviceInfo) -> bool {
        match self.devices.iter_mut().find(|d| d.address() == info.address()) {
            Some(existing) => {
                *existing = info;
                false
            }
            None => {
                self.devices.push(info);
                true
            }
        }
    }

    /// Returns the removed entry, if the address was trusted.
    pub fn remove(&mut self, address: &DeviceAddress) -> Option<DeviceInfo> {
        let idx = self.devices.iter().position(|d| d.address() == address)?;
        Some(self.devices.remove(idx))
    }

    pub fn contains(&self, address: &DeviceAddress) -> bool {
        self.devices.iter().any(|d| d.address() == address)
    }

    pub fn get(&self, address: &DeviceAddress) -> Option<&DeviceInfo> {
        self.devices.iter().find(|d| d.address() == address)
    }

    pub fn addresses(&self) -> Vec<DeviceAddress> {
        self.devices.iter().map(|d| d.address().clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeviceInfo> {
        self.devices.iter()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl FromIterator<DeviceInfo> for TrustedDevices {
    fn from_iter<I: IntoIterator<Item = DeviceInfo>>(iter: I) -> Self {
        let mut trusted = Self::new();
        for info in iter {
            trusted.add(info);
        }
        trusted
    }
}

/// Defines the contract for persisting the trusted-device list.
pub trait TrustedDeviceStore {
    /// Loads the list. A store that was never written loads as empty.
    fn load(&self) -> anyhow::Result<TrustedDevices>;

    fn save(&self, devices: &TrustedDevices) -> anyhow::Result<()>;
}
