// brdocs-core/src/pii.rs
//! Keeps taxpayer numbers and phone numbers out of debug logs.
//!
//! Values are replaced with a length-only placeholder unless the
//! `BRDOCS_ALLOW_DEBUG_PII` environment variable is set to `true`.

use once_cell::sync::Lazy;

/// Read once per process.
static PII_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("BRDOCS_ALLOW_DEBUG_PII")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

pub fn redact_sensitive(s: &str) -> String {
    if s.is_empty() {
        "[EMPTY]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.chars().count())
    }
}

/// Returns `s` itself when PII logging is allowed, a placeholder otherwise.
pub fn loggable(s: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        s.to_string()
    } else {
        redact_sensitive(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redaction_reports_length_only() {
        assert_eq!(redact_sensitive("11144477735"), "[REDACTED: 11 chars]");
        assert_eq!(redact_sensitive(""), "[EMPTY]");
    }
}
