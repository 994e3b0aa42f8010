// brdocs/src/ui/output_format.rs
//! Rendering of operation reports and status messages.
//!
//! Every function writes to a caller-supplied `Write` so output can be
//! captured in tests. Colour is only emitted when `supports_color` is true.

use anyhow::{Context, Result};
use brdocs_core::OperationReport;
use owo_colors::OwoColorize;
use std::io::Write;

use crate::cli::OutputFormat;
use crate::ui::report_table::build_report_table;

/// Writes `report` in the requested format, followed by a newline.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &OperationReport,
    format: OutputFormat,
    supports_color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("Failed to serialize report as JSON")?;
            writeln!(writer, "{}", json)?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(report).context("Failed to serialize report as YAML")?;
            write!(writer, "{}", yaml)?;
        }
        OutputFormat::Text => {
            let table = build_report_table(report, supports_color);
            writeln!(writer, "{}", table)?;
        }
    }
    Ok(())
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "error:".red().bold(), msg)?;
    } else {
        writeln!(writer, "error: {}", msg)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use brdocs_core::execute;

    #[test]
    fn json_output_uses_camel_case_fields() {
        let report = execute("validateCep", "01310100");
        let mut out = Vec::new();
        write_report(&mut out, &report, OutputFormat::Json, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"isValid\": true"));
        assert!(text.contains("\"masked\": \"01310-100\""));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn yaml_output_round_trips() {
        let report = execute("validateCpf", "111.111.111-11");
        let mut out = Vec::new();
        write_report(&mut out, &report, OutputFormat::Yaml, false).unwrap();
        let parsed: OperationReport = serde_yaml::from_slice(&out).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn plain_messages_have_no_escape_codes() {
        let mut out = Vec::new();
        print_error_message(&mut out, "boom", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "error: boom\n");
    }
}
