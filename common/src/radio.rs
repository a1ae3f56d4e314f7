//! # Radio capabilities
//!
//! The contracts the range resolver needs from the wireless stack. Adapters live in
//! `leash-radio`; tests provide scripted implementations.
//!
//! Both traits must be callable repeatedly and must release whatever handles they
//! open before returning.

use std::fmt;

use async_trait::async_trait;

use crate::device::{DeviceAddress, DiscoveredDevice, ServiceId};
use crate::error::RadioError;

/// Parameters of one discovery pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryParams {
    /// Stop once this many devices have been admitted.
    pub max_devices: usize,
    /// Admit devices paired with this host.
    pub include_remote: bool,
    /// Admit devices the stack remembers but did not hear during this sweep.
    pub include_cached: bool,
    /// Admit devices that are not paired with this host.
    pub include_unknown: bool,
    /// Restrict the sweep to Bluetooth Low Energy.
    pub le_only: bool,
}

impl DiscoveryParams {
    /// A fresh sweep for paired devices only, capped at `max_devices`.
    pub fn fresh_sweep(max_devices: usize) -> Self {
        Self {
            max_devices,
            include_remote: true,
            include_cached: false,
            include_unknown: false,
            le_only: false,
        }
    }

    pub fn unbounded() -> Self {
        Self::fresh_sweep(usize::MAX)
    }
}

/// Outcome of a single connection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected,
    /// The link layer refused, timed out or dropped the attempt.
    Transport(String),
    /// Anything else that went wrong around the attempt.
    Other(String),
}

impl ConnectOutcome {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectOutcome::Connected)
    }
}

impl fmt::Display for ConnectOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectOutcome::Connected => f.write_str("connected"),
            ConnectOutcome::Transport(reason) => write!(f, "transport error: {reason}"),
            ConnectOutcome::Other(reason) => write!(f, "error: {reason}"),
        }
    }
}

/// Enumerates the devices currently visible to the radio.
#[async_trait]
pub trait DeviceDiscovery: Send + Sync {
    async fn discover(
        &self,
        params: &DiscoveryParams,
    ) -> Result<Vec<DiscoveredDevice>, RadioError>;
}

/// Opens (and closes again) a connection to one service of one device.
#[async_trait]
pub trait DeviceConnector: Send + Sync {
    async fn connect(&self, address: &DeviceAddress, service: &ServiceId) -> ConnectOutcome;
}

/// Radio super trait.
pub trait Radio: DeviceDiscovery + DeviceConnector {}

impl<T: DeviceDiscovery + DeviceConnector> Radio for T {}
