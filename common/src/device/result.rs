use super::address::DeviceAddress;
use crate::error::ArgumentError;

/// Per-device outcome of a scan.
///
/// Starts out of range and can only ever be flipped to in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionResult {
    address: DeviceAddress,
    in_range: bool,
}

impl ConnectionResult {
    pub fn new(address: DeviceAddress) -> Self {
        Self {
            address,
            in_range: false,
        }
    }

    /// Builds an out-of-range result from raw address text.
    pub fn for_address(raw: &str) -> Result<Self, ArgumentError> {
        Ok(Self::new(DeviceAddress::new(raw)?))
    }

    pub fn from_verdict(address: DeviceAddress, in_range: bool) -> Self {
        Self { address, in_range }
    }

    pub fn mark_in_range(&mut self) {
        self.in_range = true;
    }

    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    pub fn is_in_range(&self) -> bool {
        self.in_range
    }
}
