// brdocs-core/src/validators/phone.rs
//! Landline and mobile phone validation.
//!
//! Both kinds share the phone punctuation set and the area code (DDD) rule.
//! Content alone does not tell a landline from a mobile number; the caller
//! picks the rule set.
//!
//! License: MIT OR Apache-2.0

use std::ops::RangeInclusive;

use super::{digit_values, validate, ValidationResult};
use crate::errors::ValidationError;
use crate::kind::{FieldKind, COUNTRY_CODE};

const AREA_CODES: RangeInclusive<u32> = 11..=99;

/// Validates a landline such as `(11) 3456-7890`, or the 13-digit form led by `55`.
pub fn validate_landline(raw: &str) -> ValidationResult {
    validate(FieldKind::Landline, raw)
}

/// Validates a mobile number such as `(11) 99876-5432`, or the 14-digit form led by `55`.
pub fn validate_mobile(raw: &str) -> ValidationResult {
    validate(FieldKind::Mobile, raw)
}

/// Strips the country code when present and returns the area code + subscriber part.
fn local_part(kind: FieldKind, digits: &str) -> Result<&str, ValidationError> {
    if !kind.accepts_shape(digits) {
        return Err(ValidationError::WrongLength { kind, found: digits.len() });
    }
    if digits.len() == kind.local_length() {
        Ok(digits)
    } else {
        Ok(&digits[COUNTRY_CODE.len()..])
    }
}

fn check_area_code(kind: FieldKind, local: &str) -> Result<(), ValidationError> {
    let d = digit_values(&local[..2]);
    let ddd = d[0] * 10 + d[1];
    if AREA_CODES.contains(&ddd) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAreaCode(kind))
    }
}

pub(crate) fn check_landline(digits: &str) -> Result<(), ValidationError> {
    let kind = FieldKind::Landline;
    let local = local_part(kind, digits)?;
    check_area_code(kind, local)?;

    // Subscriber numbers starting with 0 or 1 are service/long-distance prefixes.
    if local.as_bytes()[2] < b'2' {
        return Err(ValidationError::InvalidFirstDigit);
    }
    Ok(())
}

pub(crate) fn check_mobile(digits: &str) -> Result<(), ValidationError> {
    let kind = FieldKind::Mobile;
    let local = local_part(kind, digits)?;
    check_area_code(kind, local)?;

    if local.as_bytes()[2] != b'9' {
        return Err(ValidationError::MissingNinePrefix);
    }
    Ok(())
}
