//! Amount phrasing: whole units and sub-units spelled out with unit names.

use crate::currency::units_for;
use crate::decimal::Amount;
use crate::error::{Result, WordsError};
use crate::numeral::spell_integer;

/// Phrases an amount with the given main-unit and sub-unit names.
///
/// The whole part is always spelled, followed by `main_unit`. A non-zero
/// sub-unit part is appended as `and <words> <sub_unit>`; a zero sub-unit
/// part is left out entirely. The result is title-cased as a final pass, so
/// the connective comes out as `And`.
///
/// Unit names are opaque and only pass through [`title_case`]. Empty unit
/// names are skipped instead of leaving stray spaces.
///
/// # Errors
///
/// - [`WordsError::NegativeAmount`] for amounts below zero
/// - [`WordsError::MagnitudeOutOfRange`] when the whole part cannot be spelled
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use amount_words::{phrase_amount, Amount};
///
/// let amount = Amount::from_str("123.45").unwrap();
/// assert_eq!(
///     phrase_amount(amount, "Dollars", "Cents").unwrap(),
///     "One Hundred And Twenty Three Dollars And Forty Five Cents"
/// );
/// ```
pub fn phrase_amount(amount: Amount, main_unit: &str, sub_unit: &str) -> Result<String> {
    let whole = amount
        .whole_units()
        .ok_or(WordsError::NegativeAmount { amount })?;

    let mut text = spell_integer(whole)?.to_string();
    push_word(&mut text, main_unit);

    let sub = amount.sub_units();
    if sub > 0 {
        text.push_str(" and ");
        text.push_str(&spell_integer(u128::from(sub))?.to_string());
        push_word(&mut text, sub_unit);
    }

    Ok(title_case(&text))
}

/// Phrases an amount using the unit names registered for a currency code.
///
/// Unknown codes are used verbatim as the main unit with no sub-unit name.
pub fn phrase_in_currency(amount: Amount, currency: &str) -> Result<String> {
    let units = units_for(currency);
    phrase_amount(amount, units.main, units.sub)
}

/// Upper-cases the first letter of every space-separated word and
/// lower-cases the rest.
///
/// Runs of spaces are kept as they are. Applying it twice gives the same
/// result as applying it once.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for (idx, word) in text.split(' ').enumerate() {
        if idx > 0 {
            out.push(' ');
        }

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            let mut upper = first.to_uppercase();
            // Leave letters alone whose capital is more than one char ('ß' -> "SS").
            match (upper.next(), upper.next()) {
                (Some(c), None) => out.push(c),
                _ => out.push(first),
            }
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }

    out
}

fn push_word(text: &mut String, word: &str) {
    if !word.is_empty() {
        text.push(' ');
        text.push_str(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn phrase(amount: rust_decimal::Decimal, main: &str, sub: &str) -> String {
        phrase_amount(Amount::new(amount), main, sub).unwrap()
    }

    #[test]
    fn test_whole_and_sub_units() {
        assert_eq!(
            phrase(dec!(123.45), "Dollars", "Cents"),
            "One Hundred And Twenty Three Dollars And Forty Five Cents"
        );
    }

    #[test]
    fn test_zero_sub_units_are_omitted() {
        assert_eq!(phrase(dec!(1000), "Euro", "Cents"), "One Thousand Euro");
        assert_eq!(phrase(dec!(1000.00), "Euro", "Cents"), "One Thousand Euro");
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(phrase(dec!(0), "Dollars", "Cents"), "Zero Dollars");
    }

    #[test]
    fn test_sub_units_only() {
        assert_eq!(
            phrase(dec!(0.05), "Dollars", "Cents"),
            "Zero Dollars And Five Cents"
        );
    }

    #[test]
    fn test_half_cent_rounds_up() {
        assert_eq!(
            phrase(dec!(0.005), "Dollars", "Cents"),
            "Zero Dollars And One Cents"
        );
        assert_eq!(phrase(dec!(1.995), "Dollars", "Cents"), "Two Dollars");
    }

    #[test]
    fn test_no_and_between_scale_groups() {
        assert_eq!(
            phrase(dec!(1001.10), "Pound", "Pence"),
            "One Thousand One Pound And Ten Pence"
        );
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let err = phrase_amount(Amount::new(dec!(-1.50)), "Dollars", "Cents").unwrap_err();
        assert!(matches!(err, WordsError::NegativeAmount { .. }));
    }

    #[test]
    fn test_empty_unit_names() {
        assert_eq!(phrase(dec!(2.50), "", ""), "Two And Fifty");
    }

    #[test]
    fn test_phrase_in_currency() {
        let amount = Amount::new(dec!(123.45));
        assert_eq!(
            phrase_in_currency(amount, "USD").unwrap(),
            "One Hundred And Twenty Three Dollars And Forty Five Cents"
        );
        assert_eq!(
            phrase_in_currency(Amount::new(dec!(1000)), "EUR").unwrap(),
            "One Thousand Euro"
        );
    }

    #[test]
    fn test_phrase_in_unknown_currency() {
        assert_eq!(
            phrase_in_currency(Amount::new(dec!(1)), "XYZ").unwrap(),
            "One Xyz"
        );
        assert_eq!(
            phrase_in_currency(Amount::new(dec!(1.25)), "XYZ").unwrap(),
            "One Xyz And Twenty Five"
        );
    }

    #[test]
    fn test_phrase_in_currency_without_sub_unit() {
        assert_eq!(
            phrase_in_currency(Amount::new(dec!(1.50)), "JPY").unwrap(),
            "One Yen And Fifty"
        );
        assert_eq!(
            phrase_in_currency(Amount::new(dec!(500)), "HUF").unwrap(),
            "Five Hundred Forint"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("one hundred and one"), "One Hundred And One");
        assert_eq!(title_case("NEW shekel"), "New Shekel");
        assert_eq!(title_case("đồng"), "Đồng");
        assert_eq!(title_case("  two  words "), "  Two  Words ");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_keeps_multi_char_capitals() {
        assert_eq!(title_case("ßtraße"), "ßtraße");
    }

    proptest! {
        #[test]
        fn prop_title_case_idempotent(text in "[a-zA-ZÀ-ÿ' ]{0,40}") {
            let once = title_case(&text);
            prop_assert_eq!(title_case(&once), once);
        }

        #[test]
        fn prop_phrase_deterministic(cents in 0i64..1_000_000_000_000) {
            let amount = Amount::new(rust_decimal::Decimal::new(cents, 2));
            prop_assert_eq!(
                phrase_amount(amount, "Dollars", "Cents").unwrap(),
                phrase_amount(amount, "Dollars", "Cents").unwrap()
            );
        }

        #[test]
        fn prop_sub_unit_named_iff_nonzero(cents in 0i64..10_000_000) {
            let amount = Amount::new(rust_decimal::Decimal::new(cents, 2));
            let text = phrase_amount(amount, "Dollars", "Cents").unwrap();
            prop_assert_eq!(text.ends_with(" Cents"), cents % 100 != 0);
        }
    }
}
