//! errors.rs - Error taxonomy for the brdocs-core library.
//!
//! Every failure a validator can report is a variant of [`ValidationError`].
//! Validators return these as data; nothing is raised past a validator
//! boundary.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

use crate::kind::FieldKind;

/// All the ways a value can fail sanitation, validation or dispatch.
///
/// Marked `#[non_exhaustive]` so new rules can be added without breaking
/// downstream `match` statements.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("{0} contains invalid characters")]
    InvalidCharacters(FieldKind),

    #[error("{} must have {}", .kind, .kind.expected_length())]
    WrongLength { kind: FieldKind, found: usize },

    #[error("{0} cannot have all digits equal")]
    RepeatedDigits(FieldKind),

    #[error("Invalid {0} - first check digit")]
    FirstCheckDigitMismatch(FieldKind),

    #[error("Invalid {0} - second check digit")]
    SecondCheckDigitMismatch(FieldKind),

    #[error("CEP cannot be 00000-000")]
    AllZeros,

    #[error("Invalid area code (DDD) for {0}")]
    InvalidAreaCode(FieldKind),

    #[error("First digit of a landline number must be between 2-9")]
    InvalidFirstDigit,

    #[error("Mobile number must start with 9 after the area code")]
    MissingNinePrefix,

    #[error("Unsupported operation")]
    UnsupportedOperation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ValidationError {
    /// Stable, machine-readable identifier of the variant.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidCharacters(_) => "invalidCharacters",
            ValidationError::WrongLength { .. } => "wrongLength",
            ValidationError::RepeatedDigits(_) => "repeatedDigits",
            ValidationError::FirstCheckDigitMismatch(_) => "firstCheckDigitMismatch",
            ValidationError::SecondCheckDigitMismatch(_) => "secondCheckDigitMismatch",
            ValidationError::AllZeros => "allZeros",
            ValidationError::InvalidAreaCode(_) => "invalidAreaCode",
            ValidationError::InvalidFirstDigit => "invalidFirstDigit",
            ValidationError::MissingNinePrefix => "missingNinePrefix",
            ValidationError::UnsupportedOperation(_) => "unsupportedOperation",
            ValidationError::Unexpected(_) => "unexpectedError",
        }
    }
}
