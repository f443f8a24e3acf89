//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag. Field names are stable so downstream
//! build scripts can read the table without parsing the text report.

use pwmpitch_table::{Note, NoteTable, SearchConfig, Summary};
use serde::{Deserialize, Serialize};

/// Top-level document printed by `pwmpitch --json`.
#[derive(Debug, Clone, Serialize)]
pub struct TableOutput {
    /// Tool version that produced the table
    pub generator: String,
    /// Search parameters
    pub config: ConfigRecord,
    /// One record per note, in index order
    pub notes: Vec<NoteRecord>,
    /// Accuracy summary
    pub summary: Summary,
}

impl TableOutput {
    pub fn new(config: &SearchConfig, table: &NoteTable) -> Self {
        Self {
            generator: format!("pwmpitch v{}", env!("CARGO_PKG_VERSION")),
            config: ConfigRecord::from(config),
            notes: table.iter().map(NoteRecord::from).collect(),
            summary: Summary::from_table(table),
        }
    }
}

/// Search parameters as recorded in the output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigRecord {
    pub clock_hz: u32,
    pub base_note: u8,
    pub octaves: u8,
    pub divider_raw_min: u16,
    pub divider_raw_max: u16,
    pub wrap_max: u16,
}

impl From<&SearchConfig> for ConfigRecord {
    fn from(config: &SearchConfig) -> Self {
        Self {
            clock_hz: config.clock_hz,
            base_note: config.base_note,
            octaves: config.octaves,
            divider_raw_min: config.divider_range.start,
            divider_raw_max: config.divider_range.end.saturating_sub(1),
            wrap_max: config.wrap_max,
        }
    }
}

/// One note of the table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteRecord {
    pub index: usize,
    pub midi_note: u8,
    /// Scientific pitch name (e.g., "A4")
    pub name: String,
    pub target_hz: f64,
    /// False when no divider/wrap pair was found
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider_raw: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_hz: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_hz: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_cents: Option<f64>,
}

impl From<&Note> for NoteRecord {
    fn from(note: &Note) -> Self {
        let best = note.best();
        Self {
            index: note.index(),
            midi_note: note.midi_note(),
            name: note.name(),
            target_hz: note.target_frequency(),
            resolved: best.is_some(),
            divider_raw: best.map(|b| b.divider_raw),
            divisor: best.map(|b| b.divisor),
            wrap: best.map(|b| b.wrap),
            output_hz: best.map(|b| b.output_frequency),
            error_hz: best.map(|b| b.error),
            error_cents: note.error_cents(),
        }
    }
}
