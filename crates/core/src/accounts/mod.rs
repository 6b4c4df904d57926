//! Accounts module - cash accounts and their transaction logs.

mod accounts_constants;
mod accounts_model;

// Re-export the public interface
pub use accounts_constants::*;
pub use accounts_model::{Account, AccountTransaction, AccountTransactionType, CashEffect};
