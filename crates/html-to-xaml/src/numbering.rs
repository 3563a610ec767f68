//! Ordinal labels for ordered lists: decimal, alphabetic and Roman numerals.

use crate::error::{ConversionError, Result};

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHABET_BASE: i64 = 26;
/// Widest alphabetic label produced (`AAAAAAA`..`ZZZZZZZ`).
pub const MAX_ALPHABETIC_WIDTH: usize = 7;

const ROMAN_DIGITS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert a 1-based ordinal to an upper-case bijective base-26 label.
///
/// `1 → A`, `26 → Z`, `27 → AA`, `702 → ZZ`. Non-positive ordinals and ordinals
/// that need more than [`MAX_ALPHABETIC_WIDTH`] letters yield an empty label.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn alphabetic_label(ordinal: i64) -> String {
    if ordinal <= 0 {
        return String::new();
    }

    let mut letters = Vec::with_capacity(MAX_ALPHABETIC_WIDTH);
    let mut current = ordinal;
    while current > 0 {
        if letters.len() == MAX_ALPHABETIC_WIDTH {
            return String::new();
        }
        current -= 1;
        letters.push(char::from(ALPHABET[(current % ALPHABET_BASE) as usize]));
        current /= ALPHABET_BASE;
    }
    letters.iter().rev().collect()
}

/// Convert a positive ordinal to an upper-case Roman numeral.
///
/// Uses subtractive notation and has no upper bound: values past 3999 repeat `M`.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidOrdinal`] for zero or negative input.
pub fn roman_numeral(ordinal: i64) -> Result<String> {
    if ordinal <= 0 {
        return Err(ConversionError::InvalidOrdinal(ordinal));
    }

    let mut numeral = String::new();
    let mut remainder = ordinal;
    for &(value, digits) in &ROMAN_DIGITS {
        while remainder >= value {
            numeral.push_str(digits);
            remainder -= value;
        }
    }
    Ok(numeral)
}

/// Label form selected by an `ol`/`li` `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// `type="1"` and any unrecognised value.
    #[default]
    Decimal,
    /// `type="A"`
    UpperAlpha,
    /// `type="a"`
    LowerAlpha,
    /// `type="I"`
    UpperRoman,
    /// `type="i"`
    LowerRoman,
}

impl LabelStyle {
    /// Parse a `type` attribute value. Matching is case-sensitive, as in HTML.
    #[must_use]
    pub fn from_type_attr(value: &str) -> Self {
        match value {
            "A" => Self::UpperAlpha,
            "a" => Self::LowerAlpha,
            "I" => Self::UpperRoman,
            "i" => Self::LowerRoman,
            _ => Self::Decimal,
        }
    }

    /// Render `ordinal` in this style.
    ///
    /// Ordinals outside the alphabetic or Roman range fall back to decimal.
    #[must_use]
    pub fn label(self, ordinal: i64) -> String {
        let label = match self {
            Self::Decimal => None,
            Self::UpperAlpha => Some(alphabetic_label(ordinal)),
            Self::LowerAlpha => Some(alphabetic_label(ordinal).to_lowercase()),
            Self::UpperRoman => roman_numeral(ordinal).ok(),
            Self::LowerRoman => roman_numeral(ordinal).ok().map(|numeral| numeral.to_lowercase()),
        };
        match label {
            Some(label) if !label.is_empty() => label,
            _ => ordinal.to_string(),
        }
    }
}
