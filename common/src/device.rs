//! # Device Models
//!
//! * [`address::DeviceAddress`]: the only key type used for maps and sets.
//! * [`info::DeviceInfo`]: a named device, produced by discovery and stored as trusted.
//! * [`info::DiscoveredDevice`]: the raw view a discovery pass returns.
//! * [`result::ConnectionResult`]: the per-device verdict of a scan.

pub mod address;
pub mod info;
pub mod result;

pub use address::DeviceAddress;
pub use info::{DeviceInfo, DiscoveredDevice, ServiceId};
pub use result::ConnectionResult;
