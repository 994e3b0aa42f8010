// brdocs-core/src/dispatch.rs
//! Operation routing.
//!
//! The [`Dispatcher`] maps an operation identifier and a raw value to the
//! right validator and packages the outcome as an [`OperationReport`]. It
//! never returns an error and never panics: unknown identifiers become an
//! "Unsupported operation" report and a panic inside a validator becomes an
//! "Unexpected error" report.
//!
//! License: MIT OR Apache-2.0

use log::{debug, error};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;

use crate::config::ValidatorConfig;
use crate::errors::ValidationError;
use crate::formatters::{format_with_mode, FormatMode};
use crate::kind::FieldKind;
use crate::validators::{validate, ValidationResult};

/// Every operation the dispatcher can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    ValidateCpf,
    ValidateCnpj,
    ValidateLandline,
    ValidateMobile,
    ValidateCep,
    FormatCpf,
    FormatCnpj,
    FormatLandline,
    FormatMobile,
    FormatCep,
}

/// Identifier lookup table, keyed by the normalized form (lowercase, no `-`/`_`).
static OPERATION_ALIASES: Lazy<HashMap<&'static str, Operation>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for op in Operation::ALL {
        map.insert(op.normalized_name(), op);
    }
    // Portuguese identifiers.
    map.extend([
        ("validarcpf", Operation::ValidateCpf),
        ("validarcnpj", Operation::ValidateCnpj),
        ("validartelefone", Operation::ValidateLandline),
        ("validarcelular", Operation::ValidateMobile),
        ("validarcep", Operation::ValidateCep),
        ("formatarcpf", Operation::FormatCpf),
        ("formatarcnpj", Operation::FormatCnpj),
        ("formatartelefone", Operation::FormatLandline),
        ("formatarcelular", Operation::FormatMobile),
        ("formatarcep", Operation::FormatCep),
    ]);
    map
});

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::ValidateCpf,
        Operation::ValidateCnpj,
        Operation::ValidateLandline,
        Operation::ValidateMobile,
        Operation::ValidateCep,
        Operation::FormatCpf,
        Operation::FormatCnpj,
        Operation::FormatLandline,
        Operation::FormatMobile,
        Operation::FormatCep,
    ];

    /// Canonical identifier, as used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::ValidateCpf => "validateCpf",
            Operation::ValidateCnpj => "validateCnpj",
            Operation::ValidateLandline => "validateLandline",
            Operation::ValidateMobile => "validateMobile",
            Operation::ValidateCep => "validateCep",
            Operation::FormatCpf => "formatCpf",
            Operation::FormatCnpj => "formatCnpj",
            Operation::FormatLandline => "formatLandline",
            Operation::FormatMobile => "formatMobile",
            Operation::FormatCep => "formatCep",
        }
    }

    fn normalized_name(self) -> &'static str {
        match self {
            Operation::ValidateCpf => "validatecpf",
            Operation::ValidateCnpj => "validatecnpj",
            Operation::ValidateLandline => "validatelandline",
            Operation::ValidateMobile => "validatemobile",
            Operation::ValidateCep => "validatecep",
            Operation::FormatCpf => "formatcpf",
            Operation::FormatCnpj => "formatcnpj",
            Operation::FormatLandline => "formatlandline",
            Operation::FormatMobile => "formatmobile",
            Operation::FormatCep => "formatcep",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Operation::ValidateCpf | Operation::FormatCpf => FieldKind::Cpf,
            Operation::ValidateCnpj | Operation::FormatCnpj => FieldKind::Cnpj,
            Operation::ValidateLandline | Operation::FormatLandline => FieldKind::Landline,
            Operation::ValidateMobile | Operation::FormatMobile => FieldKind::Mobile,
            Operation::ValidateCep | Operation::FormatCep => FieldKind::Cep,
        }
    }

    pub fn is_format(self) -> bool {
        matches!(
            self,
            Operation::FormatCpf
                | Operation::FormatCnpj
                | Operation::FormatLandline
                | Operation::FormatMobile
                | Operation::FormatCep
        )
    }

    pub fn validate_for(kind: FieldKind) -> Operation {
        match kind {
            FieldKind::Cpf => Operation::ValidateCpf,
            FieldKind::Cnpj => Operation::ValidateCnpj,
            FieldKind::Landline => Operation::ValidateLandline,
            FieldKind::Mobile => Operation::ValidateMobile,
            FieldKind::Cep => Operation::ValidateCep,
        }
    }

    pub fn format_for(kind: FieldKind) -> Operation {
        match kind {
            FieldKind::Cpf => Operation::FormatCpf,
            FieldKind::Cnpj => Operation::FormatCnpj,
            FieldKind::Landline => Operation::FormatLandline,
            FieldKind::Mobile => Operation::FormatMobile,
            FieldKind::Cep => Operation::FormatCep,
        }
    }
}

impl FromStr for Operation {
    type Err = ValidationError;

    /// Case-insensitive; `-` and `_` are ignored, so `validate-cpf` and
    /// `VALIDATE_CPF` both resolve to [`Operation::ValidateCpf`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        OPERATION_ALIASES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| ValidationError::UnsupportedOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller's request, as received from the host shell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationRequest {
    pub operation: String,
    /// `null` or missing is treated as an empty string.
    #[serde(default)]
    pub value: Option<String>,
}

/// The record handed back to the caller.
///
/// `is_valid` implies `masked` and `unmasked` are set and `error` is not;
/// otherwise `error` and `error_kind` are set and both forms are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationReport {
    pub operation: String,
    pub original: String,
    pub is_valid: bool,
    pub masked: Option<String>,
    pub unmasked: Option<String>,
    pub error: Option<String>,
    pub error_kind: Option<String>,
}

impl OperationReport {
    pub fn from_result(operation: &str, original: &str, result: &ValidationResult) -> Self {
        match result {
            Ok(value) => Self {
                operation: operation.to_string(),
                original: original.to_string(),
                is_valid: true,
                masked: Some(value.masked.clone()),
                unmasked: Some(value.unmasked.clone()),
                error: None,
                error_kind: None,
            },
            Err(e) => Self {
                operation: operation.to_string(),
                original: original.to_string(),
                is_valid: false,
                masked: None,
                unmasked: None,
                error: Some(e.to_string()),
                error_kind: Some(e.code().to_string()),
            },
        }
    }
}

/// Routes operations to validators. Immutable once built; share it freely.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    format_mode: FormatMode,
    disabled: HashSet<Operation>,
}

impl Dispatcher {
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            format_mode: config.effective_format_mode(),
            disabled: config.disabled_set(),
        }
    }

    pub fn format_mode(&self) -> FormatMode {
        self.format_mode
    }

    /// Parses an identifier, rejecting unknown and disabled operations alike.
    pub fn resolve(&self, operation: &str) -> Result<Operation, ValidationError> {
        let op: Operation = operation.parse()?;
        if self.disabled.contains(&op) {
            debug!("Operation '{}' is disabled by configuration.", op);
            return Err(ValidationError::UnsupportedOperation(operation.to_string()));
        }
        Ok(op)
    }

    /// Runs a typed operation.
    ///
    /// Format operations validate with the same strict rules as their validate
    /// counterparts and report the canonical mask; the configured format mode
    /// only applies to [`Dispatcher::format`].
    pub fn execute_operation(&self, op: Operation, value: &str) -> ValidationResult {
        if self.disabled.contains(&op) {
            return Err(ValidationError::UnsupportedOperation(op.as_str().to_string()));
        }
        run_guarded(|| validate(op.kind(), value))
    }

    /// Runs the operation named by `operation` and packages the outcome.
    pub fn execute(&self, operation: &str, value: &str) -> OperationReport {
        debug!("Executing operation '{}'.", operation);
        let result = self
            .resolve(operation)
            .and_then(|op| self.execute_operation(op, value));
        OperationReport::from_result(operation, value, &result)
    }

    pub fn handle(&self, request: &ValidationRequest) -> OperationReport {
        self.execute(&request.operation, request.value.as_deref().unwrap_or_default())
    }

    /// Total formatter using the configured mode; never fails.
    pub fn format(&self, kind: FieldKind, raw: &str) -> String {
        format_with_mode(kind, raw, self.format_mode)
    }
}

/// Runs `operation` on `value` with the default configuration.
pub fn execute(operation: &str, value: &str) -> OperationReport {
    Dispatcher::default().execute(operation, value)
}

/// Converts a panic inside `f` into [`ValidationError::Unexpected`].
fn run_guarded<F>(f: F) -> ValidationResult
where
    F: FnOnce() -> ValidationResult,
{
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        error!("Validator panicked: {}", message);
        Err(ValidationError::Unexpected(message))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown error".to_string()
    }
}
