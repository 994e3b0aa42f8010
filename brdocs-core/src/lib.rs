// brdocs-core/src/lib.rs
//! # brdocs Core Library
//!
//! `brdocs-core` validates and formats Brazilian identifiers: CPF, CNPJ,
//! landline and mobile phone numbers, and CEP postal codes. Each call
//! returns a verdict together with the canonical masked (`111.444.777-35`)
//! and unmasked (`11144477735`) forms.
//!
//! The library is pure and stateless. Nothing here performs I/O apart from
//! loading a YAML configuration file on request.
//!
//! ## Modules
//!
//! * `kind`: the [`FieldKind`] table (punctuation, lengths, labels).
//! * `sanitizer`: strict per-kind sanitation and lenient digit stripping.
//! * `validators`: CPF/CNPJ check digits, phone structure, CEP structure.
//! * `formatters`: total, idempotent canonical formatters.
//! * `dispatch`: operation identifiers, the [`Dispatcher`] facade and the
//!   serializable [`OperationReport`].
//! * `config`: [`ValidatorConfig`] loading and merging.
//! * `errors`: the [`ValidationError`] taxonomy.
//! * `pii`: keeps identifiers out of debug logs.
//!
//! ## Usage Example
//!
//! ```rust
//! use brdocs_core::{execute, validate_cpf, format_cep};
//!
//! let cpf = validate_cpf("111.444.777-35").unwrap();
//! assert_eq!(cpf.unmasked, "11144477735");
//!
//! assert_eq!(format_cep("01310100"), "01310-100");
//!
//! let report = execute("validateMobile", "(11) 88876-5432");
//! assert!(!report.is_valid);
//! assert_eq!(report.error.as_deref(), Some("Mobile number must start with 9 after the area code"));
//! ```
//!
//! ## Error Handling
//!
//! Validators return [`ValidationResult`], a `Result` whose error side is a
//! [`ValidationError`]. The dispatcher turns every outcome, including
//! unknown operations and panics, into an [`OperationReport`]. Configuration
//! loading uses `anyhow::Result`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod dispatch;
pub mod errors;
pub mod formatters;
pub mod kind;
pub mod pii;
pub mod sanitizer;
pub mod validators;

pub use config::{merge_config, ValidatorConfig};
pub use dispatch::{execute, Dispatcher, Operation, OperationReport, ValidationRequest};
pub use errors::ValidationError;
pub use formatters::{
    format, format_cep, format_cnpj, format_cpf, format_landline, format_mobile, format_with_mode,
    FormatMode,
};
pub use kind::FieldKind;
pub use sanitizer::{sanitize, strip_non_digits};
pub use validators::{
    validate, validate_cep, validate_cnpj, validate_cpf, validate_landline, validate_mobile,
    ValidatedValue, ValidationResult,
};
