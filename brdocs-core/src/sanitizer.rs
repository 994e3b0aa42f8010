// brdocs-core/src/sanitizer.rs
//! Input sanitation.
//!
//! [`sanitize`] is strict: it only removes the punctuation a field kind
//! tolerates and rejects anything else. [`strip_non_digits`] is the lenient
//! variant used by formatters running in `FormatMode::Lenient`.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use crate::errors::ValidationError;
use crate::kind::FieldKind;
use crate::pii::loggable;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D+").expect("static regex is valid"));

/// Reduces `raw` to its digits, accepting only the punctuation allowed for `kind`.
///
/// Leading and trailing whitespace is trimmed first. An empty input yields an
/// empty digit string; the caller's length check rejects it.
///
/// # Errors
///
/// [`ValidationError::InvalidCharacters`] if any character other than a digit
/// or the kind's punctuation appears.
pub fn sanitize(raw: &str, kind: FieldKind) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let punctuation = kind.allowed_punctuation();

    if let Some(index) = trimmed
        .chars()
        .position(|c| !c.is_ascii_digit() && !punctuation.contains(&c))
    {
        // Position only; the character itself may be part of the identifier.
        debug!("{} input rejected: unexpected character at index {}", kind, index);
        return Err(ValidationError::InvalidCharacters(kind));
    }

    let cleaned: String = trimmed.chars().filter(|c| !punctuation.contains(c)).collect();

    // Second pass over the output, independent of the allow-list above.
    if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidCharacters(kind));
    }

    debug!("{} sanitized to {}", kind, loggable(&cleaned));
    Ok(cleaned)
}

/// Removes every non-digit character. Never fails.
pub fn strip_non_digits(raw: &str) -> Cow<'_, str> {
    NON_DIGITS.replace_all(raw, "")
}
