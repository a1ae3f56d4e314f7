use leash_common::device::{ConnectionResult, DeviceAddress};
use leash_common::session::SessionLock;
use tracing::{info, warn};

/// Whether every checked device was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    AllPresent,
    /// Out-of-range addresses, in result order.
    Missing(Vec<DeviceAddress>),
}

impl Verdict {
    pub fn from_results(results: &[ConnectionResult]) -> Self {
        let missing: Vec<DeviceAddress> = results
            .iter()
            .filter(|r| !r.is_in_range())
            .map(|r| r.address().clone())
            .collect();

        if missing.is_empty() {
            Verdict::AllPresent
        } else {
            Verdict::Missing(missing)
        }
    }

    pub fn should_lock(&self) -> bool {
        matches!(self, Verdict::Missing(_))
    }

    /// Out-of-range addresses; empty when everything is present.
    pub fn missing(&self) -> &[DeviceAddress] {
        match self {
            Verdict::AllPresent => &[],
            Verdict::Missing(addresses) => addresses,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAction {
    NotNeeded,
    Locked,
    /// The platform refused or the lock command failed.
    LockFailed,
    /// A lock was due but dry-run was requested.
    DryRun,
}

/// Locks the session through `lock` when the verdict asks for it.
pub fn enforce(verdict: &Verdict, lock: &dyn SessionLock, dry_run: bool) -> LockAction {
    if !verdict.should_lock() {
        info!("All devices in range");
        return LockAction::NotNeeded;
    }

    info!("{} device(s) out of range", verdict.missing().len());
    if dry_run {
        info!("Dry run, not locking the session");
        return LockAction::DryRun;
    }

    if lock.lock() {
        info!("Session locked");
        LockAction::Locked
    } else {
        warn!("Failed to lock the session");
        LockAction::LockFailed
    }
}
