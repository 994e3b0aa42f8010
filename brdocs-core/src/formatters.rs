// brdocs-core/src/formatters.rs
//! Canonical formatting of Brazilian identifiers.
//!
//! Formatters are total: a value with the right shape comes back masked,
//! anything else comes back exactly as it was given. They check shape only
//! (digit count, `55` prefix on long phone forms), never check digits, so
//! `format_cpf("12345678900")` still produces a mask.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::kind::{FieldKind, COUNTRY_CODE};
use crate::sanitizer::{sanitize, strip_non_digits};

/// Placeholder for one digit in a mask.
const SLOT: char = '#';

/// How formatters reduce their input to digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    /// Same allow-list as validation; inputs with stray characters are left untouched.
    #[default]
    Strict,
    /// Every non-digit is discarded before the shape check.
    Lenient,
}

fn mask_for(kind: FieldKind, len: usize) -> Option<&'static str> {
    match (kind, len) {
        (FieldKind::Cpf, 11) => Some("###.###.###-##"),
        (FieldKind::Cnpj, 14) => Some("##.###.###/####-##"),
        (FieldKind::Landline, 10) => Some("(##) ####-####"),
        (FieldKind::Mobile, 11) => Some("(##) #####-####"),
        (FieldKind::Cep, 8) => Some("#####-###"),
        _ => None,
    }
}

fn apply_mask(digits: &str, mask: &str) -> String {
    let mut out = String::with_capacity(mask.len());
    let mut digits = digits.chars();
    for c in mask.chars() {
        if c == SLOT {
            if let Some(d) = digits.next() {
                out.push(d);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Masks an already sanitized digit string, or returns `None` if its shape is wrong.
///
/// The `55`-prefixed phone forms have no fixed-width mask; they render as
/// `+55 ` followed by the remaining digits.
pub fn mask_digits(kind: FieldKind, digits: &str) -> Option<String> {
    if !kind.accepts_shape(digits) {
        return None;
    }
    if kind.international_length() == Some(digits.len()) {
        return Some(format!("+{} {}", COUNTRY_CODE, &digits[COUNTRY_CODE.len()..]));
    }
    mask_for(kind, digits.len()).map(|mask| apply_mask(digits, mask))
}

/// Formats `raw` as `kind` using strict sanitation.
pub fn format(kind: FieldKind, raw: &str) -> String {
    format_with_mode(kind, raw, FormatMode::Strict)
}

pub fn format_with_mode(kind: FieldKind, raw: &str, mode: FormatMode) -> String {
    let digits: Cow<'_, str> = match mode {
        FormatMode::Strict => match sanitize(raw, kind) {
            Ok(digits) => Cow::Owned(digits),
            Err(_) => return raw.to_string(),
        },
        FormatMode::Lenient => strip_non_digits(raw),
    };

    mask_digits(kind, &digits).unwrap_or_else(|| raw.to_string())
}

/// `XXX.XXX.XXX-XX`
pub fn format_cpf(raw: &str) -> String {
    format(FieldKind::Cpf, raw)
}

/// `XX.XXX.XXX/XXXX-XX`
pub fn format_cnpj(raw: &str) -> String {
    format(FieldKind::Cnpj, raw)
}

/// `(XX) XXXX-XXXX`, or `+55 ` and the remaining 11 digits for the 13-digit form.
pub fn format_landline(raw: &str) -> String {
    format(FieldKind::Landline, raw)
}

/// `(XX) XXXXX-XXXX`, or `+55 ` and the remaining 12 digits for the 14-digit form.
pub fn format_mobile(raw: &str) -> String {
    format(FieldKind::Mobile, raw)
}

/// `XXXXX-XXX`
pub fn format_cep(raw: &str) -> String {
    format(FieldKind::Cep, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bare_digits() {
        assert_eq!(format_cpf("11144477735"), "111.444.777-35");
        assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
        assert_eq!(format_landline("1134567890"), "(11) 3456-7890");
        assert_eq!(format_mobile("11998765432"), "(11) 99876-5432");
        assert_eq!(format_cep("01310100"), "01310-100");
    }

    #[test]
    fn formats_country_prefixed_phones() {
        assert_eq!(format_landline("5511345678901"), "+55 11345678901");
        assert_eq!(format_landline("+55 (11) 3456-78901"), "+55 11345678901");
        assert_eq!(format_mobile("55119987654321"), "+55 119987654321");
        // Already-formatted long forms are stable.
        assert_eq!(format_landline("+55 11345678901"), "+55 11345678901");
        assert_eq!(format_mobile("+55 119987654321"), "+55 119987654321");
    }

    #[test]
    fn does_not_check_digits() {
        assert_eq!(format_cpf("12345678900"), "123.456.789-00");
    }

    #[test]
    fn returns_input_unchanged_when_shape_is_wrong() {
        for raw in ["telefone-invalido", "123", "", "1234567890123456"] {
            assert_eq!(format_landline(raw), raw);
            assert_eq!(format_cpf(raw), raw);
        }
        // 12 digits is not a landline shape, with or without the country code.
        assert_eq!(format_landline("551134567890"), "551134567890");
        assert_eq!(format_landline("4411345678901"), "4411345678901");
    }

    #[test]
    fn strict_mode_leaves_stray_characters_alone() {
        assert_eq!(format_cpf("CPF 11144477735"), "CPF 11144477735");
    }

    #[test]
    fn lenient_mode_strips_everything() {
        assert_eq!(
            format_with_mode(FieldKind::Cpf, "CPF 11144477735", FormatMode::Lenient),
            "111.444.777-35"
        );
        assert_eq!(
            format_with_mode(FieldKind::Cep, "CEP: 01310 100", FormatMode::Lenient),
            "01310-100"
        );
        assert_eq!(format_with_mode(FieldKind::Cep, "abc", FormatMode::Lenient), "abc");
    }
}
