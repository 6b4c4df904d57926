//! Tests for account cash snapshots.

#[cfg(test)]
mod tests {
    use crate::accounts::{Account, AccountTransaction, AccountTransactionType};
    use crate::errors::{CalculatorError, Error};
    use crate::portfolio::snapshot::{format_minor_units, AccountSnapshot};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 10, 0, 0).unwrap()
    }

    fn account_with(entries: &[(AccountTransactionType, i64, DateTime<Utc>)]) -> Account {
        let mut account = Account::new("Broker Cash", "EUR");
        for (kind, amount, date) in entries {
            account.add_transaction(AccountTransaction::new(*date, *kind, *amount));
        }
        account
    }

    #[test]
    fn test_buy_deposit_sell_sequence() {
        let account = account_with(&[
            (AccountTransactionType::Buy, 500, day(1)),
            (AccountTransactionType::Deposit, 1000, day(2)),
            (AccountTransactionType::Sell, 300, day(3)),
        ]);

        let at_t2 = AccountSnapshot::create(&account, day(2)).unwrap();
        assert_eq!(at_t2.funds(), 500);

        let at_t3 = AccountSnapshot::create(&account, day(3)).unwrap();
        assert_eq!(at_t3.funds(), 800);
    }

    #[test]
    fn test_cutoff_is_inclusive_to_the_instant() {
        let account = account_with(&[(AccountTransactionType::Deposit, 1000, day(5))]);

        let before = AccountSnapshot::create(&account, day(5) - Duration::seconds(1)).unwrap();
        assert_eq!(before.funds(), 0);

        let exact = AccountSnapshot::create(&account, day(5)).unwrap();
        assert_eq!(exact.funds(), 1000);
    }

    #[test]
    fn test_all_credit_and_debit_types() {
        let account = account_with(&[
            (AccountTransactionType::Deposit, 10_000, day(1)),
            (AccountTransactionType::Dividends, 200, day(2)),
            (AccountTransactionType::Interest, 30, day(3)),
            (AccountTransactionType::Sell, 4_000, day(4)),
            (AccountTransactionType::TransferIn, 500, day(5)),
            (AccountTransactionType::Fees, 15, day(6)),
            (AccountTransactionType::Taxes, 60, day(7)),
            (AccountTransactionType::Removal, 1_000, day(8)),
            (AccountTransactionType::Buy, 7_000, day(9)),
            (AccountTransactionType::TransferOut, 250, day(10)),
        ]);

        let snapshot = AccountSnapshot::create(&account, day(31)).unwrap();
        assert_eq!(
            snapshot.funds(),
            10_000 + 200 + 30 + 4_000 + 500 - 15 - 60 - 1_000 - 7_000 - 250
        );
    }

    #[test]
    fn test_later_transactions_excluded_regardless_of_position() {
        let account = account_with(&[
            (AccountTransactionType::Deposit, 1000, day(20)),
            (AccountTransactionType::Deposit, 300, day(1)),
            (AccountTransactionType::Buy, 9999, day(25)),
            (AccountTransactionType::Fees, 50, day(2)),
        ]);

        let snapshot = AccountSnapshot::create(&account, day(10)).unwrap();
        assert_eq!(snapshot.funds(), 250);
    }

    #[test]
    fn test_balance_may_go_negative() {
        let account = account_with(&[(AccountTransactionType::Buy, 1234, day(1))]);
        let snapshot = AccountSnapshot::create(&account, day(2)).unwrap();
        assert_eq!(snapshot.funds(), -1234);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let account = account_with(&[
            (AccountTransactionType::Deposit, 1000, day(1)),
            (AccountTransactionType::Unknown, 10, day(2)),
        ]);

        let err = AccountSnapshot::create(&account, day(3)).unwrap_err();
        assert!(matches!(
            err,
            Error::Calculation(CalculatorError::UnknownTransactionType(ref t)) if t == "UNKNOWN"
        ));
        assert_eq!(
            err.to_string(),
            "Snapshot calculation failed: Unknown Account Transaction type: UNKNOWN"
        );
    }

    #[test]
    fn test_unparseable_type_names_the_offender() {
        let mut account = account_with(&[]);
        let mut transaction = AccountTransaction::new(day(1), AccountTransactionType::Deposit, 1);
        transaction.transaction_type = "SPLIT".to_string();
        account.add_transaction(transaction);

        match AccountSnapshot::create(&account, day(2)) {
            Err(Error::Calculation(CalculatorError::UnknownTransactionType(t))) => {
                assert_eq!(t, "SPLIT")
            }
            other => panic!("expected UnknownTransactionType, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_after_cutoff_is_ignored() {
        let account = account_with(&[
            (AccountTransactionType::Deposit, 1000, day(1)),
            (AccountTransactionType::Unknown, 10, day(9)),
        ]);

        let snapshot = AccountSnapshot::create(&account, day(5)).unwrap();
        assert_eq!(snapshot.funds(), 1000);
    }

    #[test]
    fn test_balance_overflow_is_an_error() {
        let account = account_with(&[
            (AccountTransactionType::Deposit, i64::MAX, day(1)),
            (AccountTransactionType::Deposit, 1, day(2)),
        ]);

        let at_max = AccountSnapshot::create(&account, day(1)).unwrap();
        assert_eq!(at_max.funds(), i64::MAX);

        let err = AccountSnapshot::create(&account, day(2)).unwrap_err();
        assert!(matches!(
            err,
            Error::Calculation(CalculatorError::FundsOverflow(ref name)) if name == "Broker Cash"
        ));
    }

    #[test]
    fn test_balance_underflow_is_an_error() {
        let account = account_with(&[
            (AccountTransactionType::Removal, i64::MAX, day(1)),
            (AccountTransactionType::Fees, 2, day(2)),
        ]);

        let result = AccountSnapshot::create(&account, day(3));
        assert!(matches!(
            result,
            Err(Error::Calculation(CalculatorError::FundsOverflow(_)))
        ));
    }

    #[test]
    fn test_snapshot_exposes_inputs() {
        let account = account_with(&[]);
        let snapshot = AccountSnapshot::create(&account, day(4)).unwrap();
        assert_eq!(snapshot.account().id, account.id);
        assert_eq!(snapshot.time(), day(4));
        assert_eq!(snapshot.funds(), 0);
    }

    #[test]
    fn test_display_renders_report_block() {
        let account = account_with(&[(AccountTransactionType::Deposit, 123_456, day(1))]);
        let snapshot = AccountSnapshot::create(&account, day(31)).unwrap();

        let rule = "-".repeat(53);
        let expected = format!(
            "{rule}\nBroker Cash\nDate: 2024-01-31\n{rule}\n{}  1,234.56\n{rule}\n",
            " ".repeat(43),
            rule = rule
        );
        assert_eq!(snapshot.to_string(), expected);
    }

    #[test]
    fn test_format_minor_units() {
        assert_eq!(format_minor_units(0), "0.00");
        assert_eq!(format_minor_units(5), "0.05");
        assert_eq!(format_minor_units(-5), "-0.05");
        assert_eq!(format_minor_units(99_999), "999.99");
        assert_eq!(format_minor_units(100_000), "1,000.00");
        assert_eq!(format_minor_units(-123_456_789), "-1,234,567.89");
    }
}
