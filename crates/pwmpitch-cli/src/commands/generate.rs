//! Generate command implementation
//!
//! Runs the divider/wrap search with the built-in configuration and prints
//! the diagnostic report and the table literal.

use anyhow::{Context, Result};
use colored::Colorize;
use pwmpitch_table::{
    diagnostic_line, render_table_literal, search, search_with_progress, NoteTable, SearchConfig,
    Summary,
};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use super::json_output::TableOutput;
use crate::progress::TerminalProgress;

/// Name written into the generated-by comment of the table.
pub const GENERATOR: &str = "pwmpitch";

/// Run the generate command
///
/// # Arguments
/// * `json_output` - Whether to output a machine-readable JSON document
///
/// # Returns
/// Exit code: 0 once the report has been written, unresolved notes included
pub fn run(json_output: bool) -> Result<ExitCode> {
    let config = SearchConfig::default();
    if json_output {
        run_json(&config)
    } else {
        run_human(&config)
    }
}

/// Run generate with the text report
fn run_human(config: &SearchConfig) -> Result<ExitCode> {
    let interactive = io::stdout().is_terminal();
    if !interactive {
        colored::control::set_override(false);
    }

    let table = if interactive {
        search_with_progress(config, &TerminalProgress::stdout())
    } else {
        search(config)
    }
    .context("Failed to run divider/wrap search")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &table).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    Ok(ExitCode::SUCCESS)
}

/// Run generate with JSON output
fn run_json(config: &SearchConfig) -> Result<ExitCode> {
    let table = search(config).context("Failed to run divider/wrap search")?;
    let output = TableOutput::new(config, &table);
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize table")?;
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}

/// Writes the diagnostic block, the summary and the table literal.
pub fn write_report<W: Write>(out: &mut W, table: &NoteTable) -> io::Result<()> {
    for note in table {
        let line = diagnostic_line(note);
        if note.is_resolved() {
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}", line.yellow())?;
        }
    }

    writeln!(out)?;
    write_summary(out, &Summary::from_table(table))?;
    writeln!(out)?;

    write!(out, "{}", render_table_literal(table, GENERATOR))
}

/// Writes the accuracy summary as `#` comment lines.
fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    let resolved = format!("{}/{}", summary.resolved, summary.note_count);
    if summary.all_resolved() {
        writeln!(out, "# {} {} notes", "Resolved:".cyan().bold(), resolved.green())?;
    } else {
        let missing = summary
            .unresolved
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "# {} {} notes (no config: {})",
            "Resolved:".cyan().bold(),
            resolved.yellow(),
            missing
        )?;
    }

    if let (Some(worst), Some(mean)) = (summary.max_error, summary.mean_error_hz) {
        writeln!(
            out,
            "# {} max {:.4} Hz (note {}), mean {:.4} Hz",
            "Error:".cyan().bold(),
            worst.error_hz,
            worst.index,
            mean
        )?;
    }
    if let Some(cents) = summary.max_error_cents {
        writeln!(out, "# {} max {:.4} cents", "Pitch:".cyan().bold(), cents)?;
    }
    Ok(())
}
