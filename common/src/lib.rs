//! Shared building blocks for `leash`.
//!
//! * [`device`]: the value objects every layer passes around.
//! * [`radio`], [`session`], [`trust`]: the capability traits the core depends on
//!   and the adapters implement.
//! * [`error`]: caller-misuse vs. environment failures.
//! * [`config`]: runtime and on-disk configuration.

pub mod config;
pub mod device;
pub mod error;
pub mod log;
pub mod radio;
pub mod session;
pub mod trust;
