//! Input and output records for batch phrasing.

use crate::decimal::Amount;
use crate::error::Result;
use crate::phrase::phrase_in_currency;
use serde::{Deserialize, Serialize};

/// Input row as read from CSV: `amount,currency`.
///
/// Both fields are optional so a blank cell can be reported per row instead
/// of aborting the whole stream. Amounts that are not decimals fail to
/// deserialize.
#[derive(Debug, Deserialize)]
pub struct AmountRecord {
    /// Decimal amount, e.g. `123.45`
    pub amount: Option<Amount>,

    /// ISO 4217 currency code, e.g. `USD`
    pub currency: Option<String>,
}

impl AmountRecord {
    /// Returns the amount and currency code of a complete row.
    ///
    /// Returns `None` if the amount is missing or the currency code is blank.
    pub fn parse(&self) -> Option<(Amount, String)> {
        let amount = self.amount?;

        let currency = self.currency.as_ref()?.trim();
        if currency.is_empty() {
            return None;
        }

        Some((amount, currency.to_string()))
    }
}

/// A phrased amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountInWords {
    /// The amount that was phrased, at 2 decimal places.
    pub amount: Amount,

    /// Currency code as given by the caller.
    pub currency: String,

    /// Title-cased phrase, e.g. `One Thousand Euro`.
    pub amount_in_word: String,
}

impl AmountInWords {
    /// Phrases `amount` in the units registered for `currency`.
    pub fn new(amount: Amount, currency: impl Into<String>) -> Result<Self> {
        let currency = currency.into();
        let amount_in_word = phrase_in_currency(amount, &currency)?;
        Ok(AmountInWords {
            amount,
            currency,
            amount_in_word,
        })
    }
}
