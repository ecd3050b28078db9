//! Error types for amount phrasing.

use crate::decimal::Amount;
use thiserror::Error;

/// Result type alias for phrasing operations
pub type Result<T> = std::result::Result<T, WordsError>;

/// Errors that can occur while spelling or phrasing an amount.
#[derive(Error, Debug)]
pub enum WordsError {
    /// Magnitude has a group above the largest named scale tier
    #[error("Magnitude {value} is too large to spell (largest supported is 10^21 - 1)")]
    MagnitudeOutOfRange { value: u128 },

    /// Negative amounts cannot be phrased
    #[error("Negative amount {amount} cannot be phrased")]
    NegativeAmount { amount: Amount },

    /// Amount text is not a valid decimal
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] rust_decimal::Error),

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input arguments
    #[error("Missing input argument. Usage: amount-words <input.csv> | amount-words <amount> <currency>")]
    MissingArgument,
}
