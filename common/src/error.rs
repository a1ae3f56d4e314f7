//! # Error taxonomy
//!
//! Two families that never mix:
//! * [`ArgumentError`]: the caller passed something invalid. Always surfaces.
//! * [`RadioError`]: the environment failed (no adapter, stack error, timeout).
//!   Contained by the scan guard and turned into "out of range".

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("maximum number of devices must be greater than zero, got {0}")]
    NonPositiveDeviceCap(i64),
    #[error("device address cannot be empty or whitespace")]
    BlankAddress,
}

#[derive(Debug, Clone, Error)]
pub enum RadioError {
    #[error("bluetooth adapter unavailable: {0}")]
    Unavailable(String),
    #[error("device discovery failed: {0}")]
    Discovery(String),
    #[error("device discovery timed out after {0:?}")]
    Timeout(Duration),
    #[error("bluetooth is not supported on this platform")]
    Unsupported,
}

/// Anything the range resolver can return.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
    #[error(transparent)]
    Radio(#[from] RadioError),
}

/// Validates a caller supplied device cap and converts it into a count.
pub fn device_cap(max_devices: i64) -> Result<usize, ArgumentError> {
    if max_devices <= 0 {
        return Err(ArgumentError::NonPositiveDeviceCap(max_devices));
    }
    Ok(usize::try_from(max_devices).unwrap_or(usize::MAX))
}
