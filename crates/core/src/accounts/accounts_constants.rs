/// Account transaction types
///
/// Each constant names one kind of cash movement recorded against an account.

/// Incoming funds from outside the portfolio. Increases cash.
pub const TRANSACTION_TYPE_DEPOSIT: &str = "DEPOSIT";

/// Outgoing funds to an external account. Decreases cash.
pub const TRANSACTION_TYPE_REMOVAL: &str = "REMOVAL";

/// Interest earned on the cash balance. Increases cash.
pub const TRANSACTION_TYPE_INTEREST: &str = "INTEREST";

/// Cash dividend paid into the account. Increases cash.
pub const TRANSACTION_TYPE_DIVIDENDS: &str = "DIVIDENDS";

/// Stand-alone fee charged to the account. Decreases cash.
pub const TRANSACTION_TYPE_FEES: &str = "FEES";

/// Tax paid from the account. Decreases cash.
pub const TRANSACTION_TYPE_TAXES: &str = "TAXES";

/// Cash leg of a security purchase. Decreases cash.
pub const TRANSACTION_TYPE_BUY: &str = "BUY";

/// Cash leg of a security sale. Increases cash.
pub const TRANSACTION_TYPE_SELL: &str = "SELL";

/// Cash moved in from another account. Increases cash.
pub const TRANSACTION_TYPE_TRANSFER_IN: &str = "TRANSFER_IN";

/// Cash moved out to another account. Decreases cash.
pub const TRANSACTION_TYPE_TRANSFER_OUT: &str = "TRANSFER_OUT";

/// Unmapped transaction type awaiting review. Has no defined cash effect.
pub const TRANSACTION_TYPE_UNKNOWN: &str = "UNKNOWN";

/// Transaction types that increase the cash balance
pub const CREDIT_TRANSACTION_TYPES: [&str; 5] = [
    TRANSACTION_TYPE_DEPOSIT,
    TRANSACTION_TYPE_DIVIDENDS,
    TRANSACTION_TYPE_INTEREST,
    TRANSACTION_TYPE_SELL,
    TRANSACTION_TYPE_TRANSFER_IN,
];

/// Transaction types that decrease the cash balance
pub const DEBIT_TRANSACTION_TYPES: [&str; 5] = [
    TRANSACTION_TYPE_FEES,
    TRANSACTION_TYPE_TAXES,
    TRANSACTION_TYPE_REMOVAL,
    TRANSACTION_TYPE_BUY,
    TRANSACTION_TYPE_TRANSFER_OUT,
];
