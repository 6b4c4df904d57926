//! Core error types for folio-core.
//!
//! Every fallible operation in the crate returns [`Result`], with the
//! domain-specific error enums folded into the root [`Error`] type.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Taxonomy operation failed: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("Snapshot calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Errors raised while building or editing a classification tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// A color string that is not of the form `#rrggbb`.
    #[error("Invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    #[error("Classification '{0}' not found")]
    ClassificationNotFound(String),

    #[error("Classification id '{0}' is already used in this taxonomy")]
    DuplicateClassificationId(String),
}

/// Errors that occur during snapshot calculations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// A transaction type the cash fold does not classify as credit or debit.
    #[error("Unknown Account Transaction type: {0}")]
    UnknownTransactionType(String),

    #[error("Funds of account '{0}' overflow the balance range")]
    FundsOverflow(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::JsonParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
