//! Portfolio snapshot module - point-in-time account state.

mod account_snapshot;

pub use account_snapshot::*;

#[cfg(test)]
mod account_snapshot_tests;
