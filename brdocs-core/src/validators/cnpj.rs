// brdocs-core/src/validators/cnpj.rs
//! CNPJ (Cadastro Nacional da Pessoa Jurídica) validation.
//!
//! License: MIT OR Apache-2.0

use super::{all_same_digit, digit_values, validate, ValidationResult};
use crate::errors::ValidationError;
use crate::kind::FieldKind;

const KIND: FieldKind = FieldKind::Cnpj;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validates a CNPJ such as `11.222.333/0001-81` or `11222333000181`.
pub fn validate_cnpj(raw: &str) -> ValidationResult {
    validate(KIND, raw)
}

/// Modulo-11 check digit: 0 when the remainder is below 2, `11 - remainder` otherwise.
pub fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

pub(crate) fn check(digits: &str) -> Result<(), ValidationError> {
    if digits.len() != KIND.local_length() {
        return Err(ValidationError::WrongLength { kind: KIND, found: digits.len() });
    }
    if all_same_digit(digits) {
        return Err(ValidationError::RepeatedDigits(KIND));
    }

    let d = digit_values(digits);
    if check_digit(&d[..12], &FIRST_WEIGHTS) != d[12] {
        return Err(ValidationError::FirstCheckDigitMismatch(KIND));
    }
    if check_digit(&d[..13], &SECOND_WEIGHTS) != d[13] {
        return Err(ValidationError::SecondCheckDigitMismatch(KIND));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_masked_and_bare_forms() {
        let ok = validate_cnpj("11.222.333/0001-81").unwrap();
        assert_eq!(ok.unmasked, "11222333000181");
        assert_eq!(ok.masked, "11.222.333/0001-81");

        assert_eq!(validate_cnpj("11222333000181").unwrap().masked, "11.222.333/0001-81");
        assert!(validate_cnpj(" 12.345.678/0001-95 ").is_ok());
    }

    #[test]
    fn rejects_repeated_digits() {
        assert_eq!(
            validate_cnpj("11.111.111/1111-11"),
            Err(ValidationError::RepeatedDigits(KIND))
        );
        assert_eq!(
            validate_cnpj("00000000000000"),
            Err(ValidationError::RepeatedDigits(KIND))
        );
    }

    #[test]
    fn reports_which_check_digit_failed() {
        assert_eq!(
            validate_cnpj("11.222.333/0001-91"),
            Err(ValidationError::FirstCheckDigitMismatch(KIND))
        );
        assert_eq!(
            validate_cnpj("11.222.333/0001-82"),
            Err(ValidationError::SecondCheckDigitMismatch(KIND))
        );
    }

    #[test]
    fn rejects_wrong_length_and_characters() {
        assert_eq!(
            validate_cnpj("11.222.333/0001"),
            Err(ValidationError::WrongLength { kind: KIND, found: 12 })
        );
        assert_eq!(
            validate_cnpj("11.222.333\\0001-81"),
            Err(ValidationError::InvalidCharacters(KIND))
        );
    }

    #[test]
    fn second_digit_covers_the_first() {
        let base = digit_values("112223330001");
        let first = check_digit(&base, &FIRST_WEIGHTS);
        assert_eq!(first, 8);
        let mut with_first = base.clone();
        with_first.push(first);
        assert_eq!(check_digit(&with_first, &SECOND_WEIGHTS), 1);
    }

    #[test]
    fn every_generated_number_round_trips() {
        let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
        for _ in 0..2_000 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let mut n = state >> 8;
            let mut d: Vec<u32> = (0..12)
                .map(|_| {
                    let x = (n % 10) as u32;
                    n /= 10;
                    x
                })
                .collect();
            let first = check_digit(&d, &FIRST_WEIGHTS);
            d.push(first);
            let second = check_digit(&d, &SECOND_WEIGHTS);
            d.push(second);

            let text: String = d.iter().map(|x| char::from(b'0' + *x as u8)).collect();
            if all_same_digit(&text) {
                continue;
            }
            let ok = validate_cnpj(&text).unwrap();
            assert_eq!(validate_cnpj(&ok.masked).unwrap().unmasked, text);
        }
    }
}
