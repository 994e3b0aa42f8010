// brdocs-core/src/validators/cpf.rs
//! CPF (Cadastro de Pessoas Físicas) validation.
//!
//! Eleven digits; the last two are modulo-11 check digits over the first
//! nine and ten digits respectively, with weights counting down to 2.
//!
//! License: MIT OR Apache-2.0

use super::{all_same_digit, digit_values, validate, ValidationResult};
use crate::errors::ValidationError;
use crate::kind::FieldKind;

const KIND: FieldKind = FieldKind::Cpf;

/// Validates a CPF such as `111.444.777-35` or `11144477735`.
pub fn validate_cpf(raw: &str) -> ValidationResult {
    validate(KIND, raw)
}

/// Computes the check digit for `digits`, weighting them `len+1, len, ..., 2`.
pub fn check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(d, w)| d * w)
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        r => r,
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
    if check_digit(&d[..9]) != d[9] {
        return Err(ValidationError::FirstCheckDigitMismatch(KIND));
    }
    if check_digit(&d[..10]) != d[10] {
        return Err(ValidationError::SecondCheckDigitMismatch(KIND));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Same digits through the textbook `11 - (sum mod 11)` formulation.
    fn reference_digit(digits: &[u32]) -> u32 {
        let n = digits.len() as u32;
        let sum: u32 = digits.iter().enumerate().map(|(i, d)| d * (n + 1 - i as u32)).sum();
        match sum % 11 {
            0 | 1 => 0,
            r => 11 - r,
        }
    }

    /// Deterministic sample of 9-digit bases.
    fn bases(count: usize) -> impl Iterator<Item = Vec<u32>> {
        let mut state: u64 = 0x2545_F491_4F6C_DD1D;
        (0..count).map(move |_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let mut n = state >> 16;
            (0..9)
                .map(|_| {
                    let d = (n % 10) as u32;
                    n /= 10;
                    d
                })
                .collect()
        })
    }

    fn to_string(d: &[u32]) -> String {
        d.iter().map(|x| char::from(b'0' + *x as u8)).collect()
    }

    #[test]
    fn accepts_known_valid_numbers() {
        let ok = validate_cpf("111.444.777-35").unwrap();
        assert_eq!(ok.unmasked, "11144477735");
        assert_eq!(ok.masked, "111.444.777-35");

        for raw in ["529.982.247-25", "52998224725", "  123.456.789-09  "] {
            assert!(validate_cpf(raw).is_ok(), "{raw}");
        }
    }

    #[test]
    fn rejects_repeated_digits() {
        for raw in ["111.111.111-11", "00000000000", "999.999.999-99"] {
            assert_eq!(validate_cpf(raw), Err(ValidationError::RepeatedDigits(KIND)));
        }
    }

    #[test]
    fn reports_which_check_digit_failed() {
        assert_eq!(
            validate_cpf("529.982.247-35"),
            Err(ValidationError::FirstCheckDigitMismatch(KIND))
        );
        assert_eq!(
            validate_cpf("12345678901"),
            Err(ValidationError::SecondCheckDigitMismatch(KIND))
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            validate_cpf("123.456.789"),
            Err(ValidationError::WrongLength { kind: KIND, found: 9 })
        );
        assert_eq!(
            validate_cpf("123.456.789-012"),
            Err(ValidationError::WrongLength { kind: KIND, found: 12 })
        );
    }

    #[test]
    fn rejects_foreign_characters() {
        for raw in ["111.444.777/35", "111,444,777-35", "111.444.777-3a"] {
            assert_eq!(validate_cpf(raw), Err(ValidationError::InvalidCharacters(KIND)));
        }
    }

    #[test]
    fn check_digits_agree_with_reference_formulation() {
        for base in bases(2_000) {
            let first = check_digit(&base);
            assert_eq!(first, reference_digit(&base));

            let mut full = base.clone();
            full.push(first);
            let second = check_digit(&full);
            assert_eq!(second, reference_digit(&full));
            full.push(second);

            let text = to_string(&full);
            if all_same_digit(&text) {
                continue;
            }
            assert!(validate_cpf(&text).is_ok(), "{text}");

            let mut bad_first = full.clone();
            bad_first[9] = (bad_first[9] + 1) % 10;
            assert_eq!(
                validate_cpf(&to_string(&bad_first)),
                Err(ValidationError::FirstCheckDigitMismatch(KIND))
            );

            let mut bad_second = full.clone();
            bad_second[10] = (bad_second[10] + 1) % 10;
            assert_eq!(
                validate_cpf(&to_string(&bad_second)),
                Err(ValidationError::SecondCheckDigitMismatch(KIND))
            );
        }
    }
}
