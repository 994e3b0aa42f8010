// brdocs-core/src/kind.rs
//! Field kinds and the per-kind rule table.
//!
//! Each [`FieldKind`] carries the punctuation it tolerates on input, the
//! digit counts it accepts and the labels used in error messages. The
//! sanitizer, validators and formatters all read from this one table.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Country calling code accepted in front of the long phone forms.
pub const COUNTRY_CODE: &str = "55";

/// The identifier families this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Individual taxpayer number, 11 digits.
    Cpf,
    /// Legal-entity taxpayer number, 14 digits.
    Cnpj,
    /// Landline phone: area code + 8-digit subscriber number.
    Landline,
    /// Mobile phone: area code + 9-digit subscriber number starting with 9.
    Mobile,
    /// Postal code, 8 digits.
    Cep,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Cpf,
        FieldKind::Cnpj,
        FieldKind::Landline,
        FieldKind::Mobile,
        FieldKind::Cep,
    ];

    /// Punctuation characters the sanitizer removes for this kind.
    pub fn allowed_punctuation(self) -> &'static [char] {
        match self {
            FieldKind::Cpf => &['.', '-'],
            FieldKind::Cnpj => &['.', '/', '-'],
            FieldKind::Landline | FieldKind::Mobile => &['(', ')', ' ', '+', '-'],
            FieldKind::Cep => &['-'],
        }
    }

    /// Local digit count, without any country prefix.
    pub fn local_length(self) -> usize {
        match self {
            FieldKind::Cpf => 11,
            FieldKind::Cnpj => 14,
            FieldKind::Landline => 10,
            FieldKind::Mobile => 11,
            FieldKind::Cep => 8,
        }
    }

    /// Digit count of the `55`-prefixed form, for kinds that have one.
    ///
    /// The prefixed forms carry one more subscriber digit than the local
    /// ones: 13 digits for landlines, 14 for mobiles.
    pub fn international_length(self) -> Option<usize> {
        match self {
            FieldKind::Landline => Some(13),
            FieldKind::Mobile => Some(14),
            _ => None,
        }
    }

    /// Returns true if `digits` has one of the accepted shapes for this kind.
    ///
    /// The long phone forms only count when they start with the country code.
    pub fn accepts_shape(self, digits: &str) -> bool {
        if digits.len() == self.local_length() {
            return true;
        }
        self.international_length() == Some(digits.len()) && digits.starts_with(COUNTRY_CODE)
    }

    /// Human description of the expected size, used in `WrongLength` messages.
    pub fn expected_length(self) -> &'static str {
        match self {
            FieldKind::Cpf => "11 digits",
            FieldKind::Cnpj => "14 digits",
            FieldKind::Landline => "10 digits (area code + number), or 13 starting with 55",
            FieldKind::Mobile => "11 digits (area code + 9 + number), or 14 starting with 55",
            FieldKind::Cep => "8 digits",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Cpf => "CPF",
            FieldKind::Cnpj => "CNPJ",
            FieldKind::Landline => "Landline",
            FieldKind::Mobile => "Mobile",
            FieldKind::Cep => "CEP",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
