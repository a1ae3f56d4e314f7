//! End-to-end tests of the presence flow, driven through in-memory radios and locks.

pub mod utils;

#[cfg(test)]
mod presence;
#[cfg(test)]
mod trust;
