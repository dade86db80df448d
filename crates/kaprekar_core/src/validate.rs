use std::num::IntErrorKind;

use crate::{
    domain::{Candidate, MAX_CANDIDATE, MIN_CANDIDATE},
    error::ValidationError,
};

/// Turns raw user text into a [`Candidate`].
///
/// Checks run in order: the trimmed text must parse as a base-10 integer, the
/// value must lie in `1000..=9999`, and its four digits must be distinct.
/// Any Unicode decimal digit counts as a digit, and single underscores may
/// separate digits (`1_234`). Integers too large for `i64` are still
/// integers, so they fail the range check rather than the parse.
pub fn validate(text: &str) -> Result<Candidate, ValidationError> {
    let digits = ascii_integer(text.trim()).ok_or(ValidationError::NotANumber)?;
    let value = match digits.parse::<i64>() {
        Ok(value) => value,
        Err(error) => {
            return Err(match error.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    ValidationError::WrongDigitCount
                }
                _ => ValidationError::NotANumber,
            })
        }
    };

    if value < i64::from(MIN_CANDIDATE) || value > i64::from(MAX_CANDIDATE) {
        return Err(ValidationError::WrongDigitCount);
    }

    let value = u16::try_from(value).map_err(|_| ValidationError::WrongDigitCount)?;
    Candidate::try_from(value)
}

/// Rewrites an optionally signed integer literal to ASCII digits, dropping
/// underscores that sit between two digits. `None` for anything else.
fn ascii_integer(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let is_digit_at = |index: usize| chars.get(index).copied().and_then(decimal_digit).is_some();

    let mut out = String::with_capacity(chars.len());
    for (index, &c) in chars.iter().enumerate() {
        if let Some(digit) = decimal_digit(c) {
            out.push(char::from(b'0' + digit));
            continue;
        }
        match c {
            '+' | '-' if index == 0 => out.push(c),
            '_' if index > 0 && is_digit_at(index - 1) && is_digit_at(index + 1) => {}
            _ => return None,
        }
    }
    Some(out)
}

/// First code point of every run of ten Unicode decimal digits (category Nd).
const DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

fn decimal_digit(c: char) -> Option<u8> {
    let code = u32::from(c);
    let run = DIGIT_ZEROS.partition_point(|&zero| zero <= code);
    let offset = code - DIGIT_ZEROS.get(run.checked_sub(1)?)?;
    u8::try_from(offset).ok().filter(|&digit| digit < 10)
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
