use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const KAPREKAR_CONSTANT: u16 = 6174;
pub const DEFAULT_MAX_STEPS: usize = 50;

pub(crate) const MIN_CANDIDATE: u16 = 1000;
pub(crate) const MAX_CANDIDATE: u16 = 9999;

/// A four-digit number whose decimal digits are pairwise distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Candidate(u16);

impl Candidate {
    pub fn value(self) -> u16 {
        self.0
    }

    /// Every candidate in ascending order.
    pub fn all() -> impl Iterator<Item = Candidate> {
        (MIN_CANDIDATE..=MAX_CANDIDATE).filter_map(|value| Candidate::try_from(value).ok())
    }
}

impl TryFrom<u16> for Candidate {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if !(MIN_CANDIDATE..=MAX_CANDIDATE).contains(&value) {
            return Err(ValidationError::WrongDigitCount);
        }
        let digits = padded_digits(value);
        let mut seen = [false; 10];
        for digit in digits {
            if std::mem::replace(&mut seen[usize::from(digit)], true) {
                return Err(ValidationError::RepeatedDigits);
            }
        }
        Ok(Self(value))
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One application of the transform: `descending - ascending = result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub descending: u16,
    pub ascending: u16,
    pub result: u16,
}

impl StepRecord {
    /// Sorts the zero-padded digits of `number` both ways and subtracts.
    pub fn from_number(number: u16) -> Self {
        let mut digits = padded_digits(number);
        digits.sort_unstable();
        let ascending = from_digits(digits.iter().copied());
        let descending = from_digits(digits.iter().rev().copied());
        Self {
            descending,
            ascending,
            result: descending - ascending,
        }
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} = {}", self.descending, self.ascending, self.result)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Converged,
    StepLimitReached,
}

/// A finished run: the starting number, every value visited, and how it ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exploration {
    pub start: u16,
    pub sequence: Vec<u16>,
    pub outcome: Outcome,
}

impl Exploration {
    pub fn steps(&self) -> usize {
        self.sequence.len().saturating_sub(1)
    }

    pub fn final_number(&self) -> u16 {
        self.sequence.last().copied().unwrap_or(self.start)
    }

    pub fn reached_constant(&self) -> bool {
        self.outcome == Outcome::Converged
    }

    /// The transform behind each non-start element, rebuilt from its predecessor.
    pub fn records(&self) -> impl Iterator<Item = StepRecord> + '_ {
        self.sequence
            .windows(2)
            .map(|pair| StepRecord::from_number(pair[0]))
    }
}

/// Decimal digits of `number`, most significant first, zero-padded to four.
/// Only the low four digits are kept.
fn padded_digits(number: u16) -> [u8; 4] {
    let mut digits = [0u8; 4];
    let mut rest = number;
    for slot in digits.iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }
    digits
}

fn from_digits(digits: impl Iterator<Item = u8>) -> u16 {
    digits.fold(0, |acc, digit| acc * 10 + u16::from(digit))
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
