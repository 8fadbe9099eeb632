//! Report formatting and printing utilities.
//!
//! Kept apart from the extraction core so the library can be used without the CLI.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::args::OutputFormat;
use super::run::{FileReport, Outcome, RunResult};
use crate::core::ExtractorOutput;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Shown in place of a method name that is not a plain identifier.
const COMPUTED_NAME: &str = "<computed>";

pub fn print(result: &RunResult, format: OutputFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Human => report_to(result, &mut stdout),
        OutputFormat::Json => json_to(result, &mut stdout)?,
    }
    Ok(())
}

/// Write the reports as a pretty-printed JSON array.
pub fn json_to<W: Write>(result: &RunResult, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &result.reports)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the human-readable report.
pub fn report_to<W: Write>(result: &RunResult, writer: &mut W) {
    for report in &result.reports {
        print_file(report, writer);
    }
    print_summary(result, writer);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_file<W: Write>(report: &FileReport, writer: &mut W) {
    match &report.outcome {
        Outcome::Extracted {
            result: Some(output),
        } => print_methods(&report.file, output, writer),
        Outcome::Extracted { result: None } => {
            let _ = writeln!(writer, "{}", report.file.bold());
            let _ = writeln!(
                writer,
                "  {}",
                "default export is not a class or object".dimmed()
            );
        }
        Outcome::Failed { error } => {
            // Cargo-style: error line, then clickable location
            let _ = writeln!(writer, "{}: {}", "error".bold().red(), error);
            let _ = writeln!(writer, "  {} {}", "-->".blue(), report.file);
        }
    }
    let _ = writeln!(writer);
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { COMPUTED_NAME } else { name }
}

fn print_methods<W: Write>(file: &str, output: &ExtractorOutput, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        file.bold(),
        format!("({})", output.kind).dimmed().cyan()
    );

    if output.methods.is_empty() {
        let _ = writeln!(writer, "  {}", "no public methods".dimmed());
        return;
    }

    let name_width = output
        .methods
        .iter()
        .map(|method| UnicodeWidthStr::width(display_name(&method.name)))
        .max()
        .unwrap_or(0);

    for method in &output.methods {
        let name = display_name(&method.name);
        let padding = name_width - UnicodeWidthStr::width(name);
        let name = if method.name.is_empty() {
            name.dimmed()
        } else {
            name.normal()
        };
        let _ = writeln!(
            writer,
            "  {}{:padding$}  {}:{}",
            name,
            "",
            file.blue(),
            method.lineno,
            padding = padding
        );
    }
}

fn print_summary<W: Write>(result: &RunResult, writer: &mut W) {
    let files = result.reports.len();
    let failures = result.failure_count();
    let methods = result.method_count();
    let file_word = if files == 1 { "file" } else { "files" };

    let msg = if failures == 0 {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Found {} {} in {} {}",
                methods,
                if methods == 1 { "method" } else { "methods" },
                files,
                file_word
            )
            .green()
        )
    } else {
        format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} of {} {} could not be extracted", failures, files, file_word).red()
        )
    };
    let _ = writeln!(writer, "{}", msg);
}
