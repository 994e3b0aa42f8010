// brdocs-core/src/validators/cep.rs
//! CEP (Código de Endereçamento Postal) validation. Structural only, no checksum.

use super::{validate, ValidationResult};
use crate::errors::ValidationError;
use crate::kind::FieldKind;

const KIND: FieldKind = FieldKind::Cep;

pub fn validate_cep(raw: &str) -> ValidationResult {
    validate(KIND, raw)
}

pub(crate) fn check(digits: &str) -> Result<(), ValidationError> {
    if digits.len() != KIND.local_length() {
        return Err(ValidationError::WrongLength { kind: KIND, found: digits.len() });
    }
    if digits.bytes().all(|b| b == b'0') {
        return Err(ValidationError::AllZeros);
    }
    Ok(())
}
