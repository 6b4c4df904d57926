//! Folio Core - classification trees and account cash snapshots.
//!
//! This crate contains the domain logic of a personal portfolio tracker:
//! taxonomies that classify investment vehicles with weighted assignments,
//! and point-in-time cash balances replayed from account transactions.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod settings;
pub mod taxonomies;
pub mod utils;

// Re-export common types
pub use portfolio::*;
pub use taxonomies::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
