//! The **range resolution** logic.
//!
//! A scan is one bounded discovery pass followed by at most one connection probe per
//! visible device of interest. Everything here talks to the radio only through the
//! [`Radio`](leash_common::radio::Radio) capability, so the same code runs against
//! BlueZ and against scripted radios in tests.

use std::collections::HashSet;

use leash_common::device::DeviceAddress;

pub mod resolver;

pub use resolver::{RangeMap, RangeResolver};

/// Drops repeated addresses, keeping the first occurrence order.
pub fn unique_addresses<I>(addresses: I) -> Vec<DeviceAddress>
where
    I: IntoIterator<Item = DeviceAddress>,
{
    let mut seen: HashSet<DeviceAddress> = HashSet::new();
    addresses
        .into_iter()
        .filter(|address| seen.insert(address.clone()))
        .collect()
}
