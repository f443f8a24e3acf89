//! Text rendering of search results.
//!
//! Two blocks are produced: one diagnostic line per note, and a list literal
//! of `(divider_raw, wrap)` pairs meant to be pasted into firmware source.

use std::fmt::Write;

use crate::note::{Note, NoteTable};

/// Name of the list the table literal assigns to.
pub const TABLE_NAME: &str = "pwm_cfgs";

/// Pairs per line in the table literal.
pub const PAIRS_PER_LINE: usize = 7;

/// Literal emitted in place of a pair for a note without a configuration.
pub const UNRESOLVED_LITERAL: &str = "None";

/// Formats the diagnostic line for one note.
///
/// ```text
/// 24:  440.00 ->  440.00 (err=0.00) : 0x0010 (  1.00) , 0x9b5b
/// ```
pub fn diagnostic_line(note: &Note) -> String {
    match note.best() {
        None => format!("{}: no config", note.index()),
        Some(best) => format!(
            "{:2}: {:7.2} -> {:7.2} (err={:4.2}) : 0x{:04x} ({:6.2}) , 0x{:04x}",
            note.index(),
            note.target_frequency(),
            best.output_frequency,
            best.error,
            best.divider_raw,
            best.divisor,
            best.wrap,
        ),
    }
}

/// Formats the diagnostic block, one line per note in index order.
pub fn render_diagnostics(table: &NoteTable) -> String {
    let mut out = String::new();
    for note in table {
        out.push_str(&diagnostic_line(note));
        out.push('\n');
    }
    out
}

/// Formats a single table entry, `(0x10,0x9b5b)` or `None`.
pub fn table_entry(note: &Note) -> String {
    match note.best() {
        Some(best) => format!("(0x{:x},0x{:x})", best.divider_raw, best.wrap),
        None => UNRESOLVED_LITERAL.to_string(),
    }
}

/// Formats the table block: a generated-by comment, a blank line and the
/// `pwm_cfgs = [...]` literal wrapped after every seventh pair.
pub fn render_table_literal(table: &NoteTable, generator: &str) -> String {
    let prefix = format!("{} = [", TABLE_NAME);
    let indent = " ".repeat(prefix.len());
    let last = table.len().saturating_sub(1);

    let mut out = String::new();
    let _ = writeln!(out, "# This table is generated using {}", generator);
    out.push('\n');
    out.push_str(&prefix);
    for (i, note) in table.iter().enumerate() {
        out.push_str(&table_entry(note));
        if i < last {
            out.push(',');
            if i % PAIRS_PER_LINE == PAIRS_PER_LINE - 1 {
                out.push('\n');
                out.push_str(&indent);
            }
        }
    }
    out.push_str("]\n");
    out
}
