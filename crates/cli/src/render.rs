// Output rendering for execution results

use std::io::{self, Write};

use clap::ValueEnum;
use colored::Colorize;
use gitexec_core::ExecutionResult;
use tabled::{Table, Tabled};

/// Process exit code used when git could not be launched (shell convention)
pub const LAUNCH_FAILURE_PROCESS_CODE: u8 = 127;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pass captured stdout/stderr through unchanged
    Raw,
    /// Print the whole result as JSON
    Json,
    /// Print a status line and a summary table
    Table,
}

#[derive(Tabled)]
struct SummaryRow {
    ok: bool,
    #[tabled(rename = "exit code")]
    exit_code: i32,
    #[tabled(rename = "stdout lines")]
    stdout_lines: usize,
    #[tabled(rename = "stderr lines")]
    stderr_lines: usize,
}

/// Write `result` in the requested format
pub fn render(
    result: &ExecutionResult,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Raw => {
            out.write_all(result.stdout().as_bytes())?;
            err.write_all(result.stderr().as_bytes())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Table => {
            if result.ok() {
                writeln!(out, "{}", "✓ Command succeeded".green().bold())?;
            } else if result.is_launch_failure() {
                writeln!(out, "{}", "✗ Command could not be launched".red().bold())?;
            } else {
                writeln!(out, "{}", "✗ Command failed".red().bold())?;
            }
            writeln!(out)?;

            let row = SummaryRow {
                ok: result.ok(),
                exit_code: result.exit_code(),
                stdout_lines: result.stdout().lines().count(),
                stderr_lines: result.stderr().lines().count(),
            };
            writeln!(out, "{}", Table::new(vec![row]))?;

            if !result.stderr().is_empty() {
                writeln!(out)?;
                writeln!(out, "{}", "stderr:".yellow().bold())?;
                write!(out, "{}", result.stderr())?;
            }
        }
    }
    out.flush()
}

/// Map a result onto the exit code of the `gitexec` process itself
pub fn process_exit_code(result: &ExecutionResult) -> u8 {
    if result.is_launch_failure() {
        return LAUNCH_FAILURE_PROCESS_CODE;
    }
    u8::try_from(result.exit_code()).unwrap_or(1)
}
