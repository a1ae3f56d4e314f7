//! # leash core
//!
//! * [`scanner`]: the range resolver, one discovery pass plus per-device probes.
//! * [`presence`]: the service the shell talks to (full discovery, guarded scan, check).
//! * [`verdict`]: turning scan results into a lock decision.
//! * [`system`], [`trust`]: OS-facing adapters for session locking and the trust store.

pub mod presence;
pub mod scanner;
pub mod system;
pub mod trust;
pub mod verdict;

#[cfg(test)]
pub(crate) mod testing;
