//! Which devices a discovery pass reports.
//!
//! The Bluetooth stack remembers every device it has ever seen, so a sweep has to
//! tell apart devices heard right now from stale entries, and paired devices from
//! strangers.
//!
//! A device counts as heard only if it answered this sweep's inquiry or already has
//! a link open. A paired phone that is in range but idle and not discoverable does
//! neither, so it is never probed and reads as out of range, which locks the
//! session. Keeping the phone connected (or discoverable) avoids spurious locks.

use leash_common::radio::DiscoveryParams;

/// What the stack knows about one device at the moment it is inspected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sighting {
    /// Bonded with this host.
    pub paired: bool,
    /// A link to the device is currently open.
    pub connected: bool,
    /// The device answered during this sweep (the stack has a signal strength for it).
    pub heard: bool,
}

impl Sighting {
    /// Connected devices do not answer inquiries but are visible all the same.
    pub fn is_fresh(&self) -> bool {
        self.heard || self.connected
    }
}

pub fn admits(params: &DiscoveryParams, sighting: &Sighting) -> bool {
    if !sighting.is_fresh() && !params.include_cached {
        return false;
    }

    if sighting.paired {
        params.include_remote
    } else {
        params.include_unknown
    }
}
