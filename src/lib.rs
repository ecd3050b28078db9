//! # Amount Words
//!
//! Spells monetary amounts as English words, qualified by the currency's
//! main-unit and sub-unit names.
//!
//! ## Design Principles
//!
//! - **Exact decimals**: Amounts are held at 2 decimal places via `rust_decimal`
//! - **Bounded scales**: Magnitudes beyond the quintillions are an error, not a panic
//! - **Pure core**: Spelling and phrasing have no I/O and no shared state
//! - **Streaming batches**: CSV rows are phrased and written one at a time
//!
//! ## Example
//!
//! ```
//! use amount_words::{phrase_in_currency, spell_integer, Amount};
//! use std::str::FromStr;
//!
//! assert_eq!(spell_integer(21).unwrap().to_string(), "twenty one");
//!
//! let amount = Amount::from_str("1000").unwrap();
//! assert_eq!(phrase_in_currency(amount, "EUR").unwrap(), "One Thousand Euro");
//! ```

pub mod converter;
pub mod currency;
pub mod decimal;
pub mod error;
pub mod numeral;
pub mod phrase;
pub mod record;

pub use converter::Converter;
pub use currency::{units_for, CurrencyUnits};
pub use decimal::Amount;
pub use error::{Result, WordsError};
pub use numeral::{spell_group, spell_integer, WordPhrase, MAX_MAGNITUDE};
pub use phrase::{phrase_amount, phrase_in_currency, title_case};
pub use record::{AmountInWords, AmountRecord};
