// brdocs-core/src/validators/mod.rs
//! Structural and check-digit validation for each field kind.
//!
//! Every kind goes through the same pipeline: [`sanitize`] the raw input,
//! run the kind's rule on the digit string, then mask it. The rules live in
//! one submodule per family and are looked up by [`FieldKind`].
//!
//! Checks run in a fixed order (characters, length, repetition or structure,
//! check digits) so the first rule that fails names the error.
//!
//! License: MIT OR Apache-2.0

pub mod cep;
pub mod cnpj;
pub mod cpf;
pub mod phone;

use log::debug;
use serde::Serialize;

use crate::errors::ValidationError;
use crate::formatters::mask_digits;
use crate::kind::FieldKind;
use crate::pii::loggable;
use crate::sanitizer::sanitize;

pub use cep::validate_cep;
pub use cnpj::validate_cnpj;
pub use cpf::validate_cpf;
pub use phone::{validate_landline, validate_mobile};

/// A value that passed every rule for its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedValue {
    pub kind: FieldKind,
    /// Digits only, including the country code when one was given.
    pub unmasked: String,
    /// Canonical punctuated form.
    pub masked: String,
}

pub type ValidationResult = Result<ValidatedValue, ValidationError>;

/// A per-kind rule over an already sanitized digit string.
type Rule = fn(&str) -> Result<(), ValidationError>;

fn rule_for(kind: FieldKind) -> Rule {
    match kind {
        FieldKind::Cpf => cpf::check,
        FieldKind::Cnpj => cnpj::check,
        FieldKind::Landline => phone::check_landline,
        FieldKind::Mobile => phone::check_mobile,
        FieldKind::Cep => cep::check,
    }
}

/// Validates `raw` as `kind` and returns its canonical representations.
pub fn validate(kind: FieldKind, raw: &str) -> ValidationResult {
    let digits = sanitize(raw, kind)?;

    if let Err(e) = rule_for(kind)(&digits) {
        debug!("{} {} rejected: {}", kind, loggable(&digits), e);
        return Err(e);
    }

    let masked = mask_digits(kind, &digits).ok_or(ValidationError::WrongLength {
        kind,
        found: digits.len(),
    })?;

    debug!("{} {} accepted", kind, loggable(&digits));
    Ok(ValidatedValue {
        kind,
        unmasked: digits,
        masked,
    })
}

/// True when every digit equals the first one (and there is at least one).
pub(crate) fn all_same_digit(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}

/// Numeric values of an ASCII digit string. Callers pass sanitized input only.
pub(crate) fn digit_values(digits: &str) -> Vec<u32> {
    digits.bytes().map(|b| u32::from(b.wrapping_sub(b'0'))).collect()
}
