//! English cardinal numerals.
//!
//! Numbers are split into three-digit groups from the least significant end.
//! Each non-zero group is rendered on its own and followed by its scale word,
//! then the groups are joined most significant first.
//!
//! "and" only ever appears inside a group, between the hundreds and the rest
//! ("one hundred and one"), never between scale groups ("one thousand one").

use crate::error::{Result, WordsError};
use std::fmt;

const SMALL_NUMBERS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS_NUMBERS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale words indexed by tier; tier `i` names `1000^i`.
const SCALE_NUMBERS: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Largest magnitude [`spell_integer`] can name: 999 quintillion 999 ... 999.
pub const MAX_MAGNITUDE: u128 = 999_999_999_999_999_999_999;

/// An ordered sequence of English words, most significant first.
///
/// Displays as the words joined by single spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordPhrase {
    words: Vec<&'static str>,
}

impl WordPhrase {
    /// The words in output order.
    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn push(&mut self, word: &'static str) {
        self.words.push(word);
    }

    fn append(&mut self, other: WordPhrase) {
        self.words.extend(other.words);
    }
}

impl fmt::Display for WordPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, word) in self.words.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

/// Spells a non-negative integer as an English cardinal phrase.
///
/// # Errors
///
/// Returns [`WordsError::MagnitudeOutOfRange`] when `n` exceeds
/// [`MAX_MAGNITUDE`], i.e. when a non-zero group has no scale word.
///
/// # Examples
///
/// ```
/// use amount_words::spell_integer;
///
/// assert_eq!(spell_integer(0).unwrap().to_string(), "zero");
/// assert_eq!(
///     spell_integer(1_234).unwrap().to_string(),
///     "one thousand two hundred and thirty four"
/// );
/// assert!(spell_integer(1_000_000_000_000_000_000_000).is_err());
/// ```
pub fn spell_integer(n: u128) -> Result<WordPhrase> {
    if n == 0 {
        return Ok(WordPhrase {
            words: vec![SMALL_NUMBERS[0]],
        });
    }

    // (group, scale word) from least to most significant
    let mut groups: Vec<(u16, &'static str)> = Vec::new();
    let mut rest = n;
    let mut tier = 0;

    while rest > 0 {
        let group = (rest % 1000) as u16;
        if group != 0 {
            let scale = SCALE_NUMBERS
                .get(tier)
                .ok_or(WordsError::MagnitudeOutOfRange { value: n })?;
            groups.push((group, *scale));
        }
        rest /= 1000;
        tier += 1;
    }

    let mut phrase = WordPhrase::default();
    for (group, scale) in groups.into_iter().rev() {
        phrase.append(render_group(group));
        if !scale.is_empty() {
            phrase.push(scale);
        }
    }

    Ok(phrase)
}

/// Spells a single three-digit group in `0..=999`.
///
/// Zero renders as an empty phrase, since a zero group contributes nothing
/// to a larger number.
pub fn spell_group(n: u16) -> Result<WordPhrase> {
    if n > 999 {
        return Err(WordsError::MagnitudeOutOfRange {
            value: u128::from(n),
        });
    }
    Ok(render_group(n))
}

fn render_group(n: u16) -> WordPhrase {
    let mut phrase = WordPhrase::default();
    let mut rem = usize::from(n);

    if rem >= 100 {
        phrase.push(SMALL_NUMBERS[rem / 100]);
        phrase.push("hundred");
        rem %= 100;
        if rem > 0 {
            phrase.push("and");
        }
    }

    if rem >= 20 {
        phrase.push(TENS_NUMBERS[rem / 10]);
        rem %= 10;
        if rem > 0 {
            phrase.push(SMALL_NUMBERS[rem]);
        }
    } else if rem > 0 {
        phrase.push(SMALL_NUMBERS[rem]);
    }

    phrase
}
