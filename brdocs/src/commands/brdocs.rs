//! brdocs command implementations.

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::io::{Read, Write};
use std::path::Path;

use brdocs_core::{
    merge_config, Dispatcher, FieldKind, Operation, OperationReport, ValidationRequest,
    ValidatorConfig,
};

use crate::cli::OutputFormat;
use crate::ui::output_format::write_report;

/// Options shared by every report-printing command.
pub struct ReportOptions {
    pub output: OutputFormat,
    pub supports_color: bool,
    pub fail_on_invalid: bool,
}

/// Builds the dispatcher from the embedded defaults plus an optional user file.
pub fn load_dispatcher(config_path: Option<&Path>) -> Result<Dispatcher> {
    let default_config = ValidatorConfig::load_default()?;
    let user_config = config_path
        .map(|path| {
            ValidatorConfig::load_from_file(path)
                .with_context(|| format!("Failed to load configuration '{}'", path.display()))
        })
        .transpose()?;

    let config = merge_config(default_config, user_config);
    debug!("Effective configuration: {:?}", config);
    Ok(Dispatcher::new(&config))
}

/// Returns `value`, or stdin with the trailing line break removed when `value` is absent.
pub fn resolve_value<R: Read>(value: Option<String>, mut stdin: R) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }
    debug!("Reading value from stdin...");
    let mut buf = String::new();
    stdin.read_to_string(&mut buf).context("Failed to read value from stdin")?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}

fn emit<W: Write>(writer: &mut W, report: &OperationReport, opts: &ReportOptions) -> Result<()> {
    write_report(writer, report, opts.output, opts.supports_color)?;
    if opts.fail_on_invalid && !report.is_valid {
        return Err(anyhow!(
            "{} rejected the value: {}",
            report.operation,
            report.error.as_deref().unwrap_or("invalid")
        ));
    }
    Ok(())
}

/// `brdocs validate <KIND> [VALUE]`
pub fn run_validate<W: Write>(
    dispatcher: &Dispatcher,
    kind: FieldKind,
    value: &str,
    writer: &mut W,
    opts: &ReportOptions,
) -> Result<()> {
    info!("Validating {} value.", kind);
    let op = Operation::validate_for(kind);
    let report = OperationReport::from_result(op.as_str(), value, &dispatcher.execute_operation(op, value));
    emit(writer, &report, opts)
}

/// `brdocs format <KIND> [VALUE]`: prints the formatted value only.
pub fn run_format<W: Write>(dispatcher: &Dispatcher, kind: FieldKind, value: &str, writer: &mut W) -> Result<()> {
    info!("Formatting {} value ({:?} mode).", kind, dispatcher.format_mode());
    writeln!(writer, "{}", dispatcher.format(kind, value))?;
    Ok(())
}

/// `brdocs exec <OPERATION> [VALUE]`
pub fn run_exec<W: Write>(
    dispatcher: &Dispatcher,
    operation: &str,
    value: &str,
    writer: &mut W,
    opts: &ReportOptions,
) -> Result<()> {
    info!("Executing operation '{}'.", operation);
    let report = dispatcher.execute(operation, value);
    emit(writer, &report, opts)
}

/// `brdocs request`: one JSON request in, one report out.
pub fn run_request<R: Read, W: Write>(
    dispatcher: &Dispatcher,
    mut input: R,
    writer: &mut W,
    opts: &ReportOptions,
) -> Result<()> {
    let mut buf = String::new();
    input.read_to_string(&mut buf).context("Failed to read request from stdin")?;
    let request: ValidationRequest =
        serde_json::from_str(&buf).context("Failed to parse request JSON")?;
    let report = dispatcher.handle(&request);
    emit(writer, &report, opts)
}
