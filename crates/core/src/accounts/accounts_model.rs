//! Account domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::accounts_constants::*;

/// Domain model representing a cash account and its transaction log.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub currency: String,
    #[serde(default)]
    pub transactions: Vec<AccountTransaction>,
}

impl Account {
    pub fn new(name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            currency: currency.into(),
            transactions: Vec::new(),
        }
    }

    pub fn add_transaction(&mut self, transaction: AccountTransaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[AccountTransaction] {
        &self.transactions
    }
}

/// A single cash movement on an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTransaction {
    pub id: String,
    pub date: DateTime<Utc>,
    /// Canonical type name, see [`AccountTransactionType`]
    pub transaction_type: String,
    /// Amount in minor currency units (cents); never negative
    pub amount: i64,
    pub note: Option<String>,
}

impl AccountTransaction {
    pub fn new(date: DateTime<Utc>, transaction_type: AccountTransactionType, amount: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            transaction_type: transaction_type.as_str().to_string(),
            amount,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Direction in which a transaction moves the cash balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashEffect {
    Credit,
    Debit,
    /// No cash rule exists for the type
    Unclassified,
}

/// Enum representing the kinds of account transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountTransactionType {
    Deposit,
    Removal,
    Interest,
    Dividends,
    Fees,
    Taxes,
    Buy,
    Sell,
    TransferIn,
    TransferOut,
    Unknown, // Unmapped type, requires review
}

impl AccountTransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountTransactionType::Deposit => TRANSACTION_TYPE_DEPOSIT,
            AccountTransactionType::Removal => TRANSACTION_TYPE_REMOVAL,
            AccountTransactionType::Interest => TRANSACTION_TYPE_INTEREST,
            AccountTransactionType::Dividends => TRANSACTION_TYPE_DIVIDENDS,
            AccountTransactionType::Fees => TRANSACTION_TYPE_FEES,
            AccountTransactionType::Taxes => TRANSACTION_TYPE_TAXES,
            AccountTransactionType::Buy => TRANSACTION_TYPE_BUY,
            AccountTransactionType::Sell => TRANSACTION_TYPE_SELL,
            AccountTransactionType::TransferIn => TRANSACTION_TYPE_TRANSFER_IN,
            AccountTransactionType::TransferOut => TRANSACTION_TYPE_TRANSFER_OUT,
            AccountTransactionType::Unknown => TRANSACTION_TYPE_UNKNOWN,
        }
    }

    pub fn cash_effect(&self) -> CashEffect {
        match self {
            AccountTransactionType::Deposit
            | AccountTransactionType::Dividends
            | AccountTransactionType::Interest
            | AccountTransactionType::Sell
            | AccountTransactionType::TransferIn => CashEffect::Credit,
            AccountTransactionType::Fees
            | AccountTransactionType::Taxes
            | AccountTransactionType::Removal
            | AccountTransactionType::Buy
            | AccountTransactionType::TransferOut => CashEffect::Debit,
            AccountTransactionType::Unknown => CashEffect::Unclassified,
        }
    }
}

impl fmt::Display for AccountTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountTransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            TRANSACTION_TYPE_DEPOSIT => Ok(AccountTransactionType::Deposit),
            TRANSACTION_TYPE_REMOVAL => Ok(AccountTransactionType::Removal),
            TRANSACTION_TYPE_INTEREST => Ok(AccountTransactionType::Interest),
            TRANSACTION_TYPE_DIVIDENDS => Ok(AccountTransactionType::Dividends),
            TRANSACTION_TYPE_FEES => Ok(AccountTransactionType::Fees),
            TRANSACTION_TYPE_TAXES => Ok(AccountTransactionType::Taxes),
            TRANSACTION_TYPE_BUY => Ok(AccountTransactionType::Buy),
            TRANSACTION_TYPE_SELL => Ok(AccountTransactionType::Sell),
            TRANSACTION_TYPE_TRANSFER_IN => Ok(AccountTransactionType::TransferIn),
            TRANSACTION_TYPE_TRANSFER_OUT => Ok(AccountTransactionType::TransferOut),
            TRANSACTION_TYPE_UNKNOWN => Ok(AccountTransactionType::Unknown),
            _ => Err(format!("Unknown account transaction type: {}", s)),
        }
    }
}
