//! Point-in-time cash balance of an account.

use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use std::fmt;

use crate::accounts::{Account, AccountTransactionType, CashEffect};
use crate::errors::{CalculatorError, Result};

const REPORT_RULE: &str = "-----------------------------------------------------";
const REPORT_INDENT: &str = "                                           ";

/// Cash balance of an account as of a cutoff instant.
///
/// Built once by [`AccountSnapshot::create`] and immutable afterwards.
#[derive(Debug, Clone)]
pub struct AccountSnapshot<'a> {
    account: &'a Account,
    time: DateTime<Utc>,
    funds: i64,
}

impl<'a> AccountSnapshot<'a> {
    /// Replays every transaction dated at or before `time` and sums its cash effect.
    ///
    /// Transactions after the cutoff are skipped wherever they appear in the log.
    /// A type without a cash rule fails with
    /// [`CalculatorError::UnknownTransactionType`]; a balance outside the `i64`
    /// range fails with [`CalculatorError::FundsOverflow`].
    pub fn create(account: &'a Account, time: DateTime<Utc>) -> Result<Self> {
        let mut funds: i64 = 0;

        for transaction in account.transactions().iter().filter(|t| t.date <= time) {
            let effect = transaction
                .transaction_type
                .parse::<AccountTransactionType>()
                .map(|kind| kind.cash_effect())
                .unwrap_or(CashEffect::Unclassified);

            let next = match effect {
                CashEffect::Credit => funds.checked_add(transaction.amount),
                CashEffect::Debit => funds.checked_sub(transaction.amount),
                CashEffect::Unclassified => {
                    return Err(CalculatorError::UnknownTransactionType(
                        transaction.transaction_type.clone(),
                    )
                    .into());
                }
            };
            funds = next.ok_or_else(|| CalculatorError::FundsOverflow(account.name.clone()))?;
        }

        debug!(
            "Account snapshot for '{}' at {}: funds {}",
            account.name, time, funds
        );

        Ok(Self {
            account,
            time,
            funds,
        })
    }

    pub fn account(&self) -> &'a Account {
        self.account
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Signed balance in minor currency units.
    pub fn funds(&self) -> i64 {
        self.funds
    }
}

impl fmt::Display for AccountSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_RULE)?;
        writeln!(f, "{}", self.account.name)?;
        writeln!(f, "Date: {}", self.time.format("%Y-%m-%d"))?;
        writeln!(f, "{}", REPORT_RULE)?;
        writeln!(f, "{}{:>10}", REPORT_INDENT, format_minor_units(self.funds))?;
        writeln!(f, "{}", REPORT_RULE)
    }
}

/// Formats minor units as a grouped decimal with two fraction digits, e.g. `-1,234.50`.
pub fn format_minor_units(minor_units: i64) -> String {
    let value = Decimal::new(minor_units, 2).abs().to_string();
    let (integer, fraction) = value.split_once('.').unwrap_or((value.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if minor_units < 0 { "-" } else { "" };
    format!("{}{}.{:0<2}", sign, grouped, fraction)
}
