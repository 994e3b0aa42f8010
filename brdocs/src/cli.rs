// brdocs/src/cli.rs
//! This file defines the command-line interface (CLI) for the brdocs application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use brdocs_core::FieldKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "brdocs",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate and format Brazilian identifiers",
    long_about = "brdocs validates CPF and CNPJ check digits, landline and mobile phone structure, and CEP postal codes, and prints their canonical masked and digit-only forms.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable all log output
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML configuration file merged over the built-in defaults.
    #[arg(long = "config", value_name = "FILE", env = "BRDOCS_CONFIG", global = true, help = "Path to a YAML configuration file.")]
    pub config: Option<PathBuf>,

    /// How reports are printed.
    #[arg(long = "output", short = 'o', value_enum, default_value = "json", env = "BRDOCS_OUTPUT", global = true, help = "Report format: json, yaml or text.")]
    pub output: OutputFormat,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `brdocs` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validates a value and prints the full report.
    #[command(about = "Validate a value of the given kind and print the report.")]
    Validate(ValidateCommand),

    /// Formats a value without checking its check digits.
    #[command(about = "Print the canonical masked form of a value, or the value unchanged if its shape is wrong.")]
    Format(FormatCommand),

    /// Runs an operation by identifier, as a host integration would.
    #[command(about = "Run an operation by identifier (e.g. validateCpf, validarCelular, formatCep).")]
    Exec(ExecCommand),

    /// Reads a JSON request from stdin and prints the report.
    #[command(about = "Read a JSON request {\"operation\": ..., \"value\": ...} from stdin and print the report.")]
    Request,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    #[arg(value_enum, help = "Kind of identifier.")]
    pub kind: KindChoice,

    /// Value to validate (reads stdin if omitted).
    #[arg(value_name = "VALUE", help = "Value to validate; read from stdin if omitted.")]
    pub value: Option<String>,

    #[arg(long = "fail-on-invalid", help = "Exit with a non-zero code if the value is invalid.")]
    pub fail_on_invalid: bool,
}

/// Arguments for the `format` command.
#[derive(Parser, Debug)]
pub struct FormatCommand {
    #[arg(value_enum, help = "Kind of identifier.")]
    pub kind: KindChoice,

    #[arg(value_name = "VALUE", help = "Value to format; read from stdin if omitted.")]
    pub value: Option<String>,
}

/// Arguments for the `exec` command.
#[derive(Parser, Debug)]
pub struct ExecCommand {
    #[arg(value_name = "OPERATION", help = "Operation identifier.")]
    pub operation: String,

    #[arg(value_name = "VALUE", help = "Value to process; read from stdin if omitted.")]
    pub value: Option<String>,

    #[arg(long = "fail-on-invalid", help = "Exit with a non-zero code if the report is not valid.")]
    pub fail_on_invalid: bool,
}

/// Identifier kinds accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum KindChoice {
    Cpf,
    Cnpj,
    #[value(alias = "telefone")]
    Landline,
    #[value(alias = "celular")]
    Mobile,
    Cep,
}

impl From<KindChoice> for FieldKind {
    fn from(choice: KindChoice) -> Self {
        match choice {
            KindChoice::Cpf => FieldKind::Cpf,
            KindChoice::Cnpj => FieldKind::Cnpj,
            KindChoice::Landline => FieldKind::Landline,
            KindChoice::Mobile => FieldKind::Mobile,
            KindChoice::Cep => FieldKind::Cep,
        }
    }
}

/// Report rendering.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    /// Human-readable table.
    Text,
}
