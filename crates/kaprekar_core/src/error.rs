use thiserror::Error;

/// Reasons user-supplied text is not a candidate number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Input must be a valid number")]
    NotANumber,
    #[error("Number must be exactly 4 digits")]
    WrongDigitCount,
    #[error("All 4 digits must be different (no repeated digits)")]
    RepeatedDigits,
}
