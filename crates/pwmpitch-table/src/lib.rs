//! PWM Pitch Table Search
//!
//! This crate computes, for a range of equal-tempered notes, the PWM divider
//! and wrap register values that bring a fixed system clock closest to each
//! note's frequency. The target is an RP2040-style PWM slice: an 8.4
//! fixed-point clock divider followed by a 16-bit counter that wraps at TOP.
//!
//! ```text
//! output = clock_hz / (divider_raw / 16) / (wrap + 1)
//! ```
//!
//! # Search
//!
//! Every divider raw value in `16..4096` is combined with every wrap value in
//! `0..=65535`. The divider range is partitioned across worker threads; each
//! worker keeps its own [`NoteTable`] and the partial tables are merged with a
//! per-note minimum. On exactly equal error the smaller divider wins, then the
//! smaller wrap, so results never depend on scheduling.
//!
//! # Example
//!
//! ```
//! use pwmpitch_table::{render_table_literal, search, SearchConfig};
//!
//! // A reduced search space keeps the example fast.
//! let config = SearchConfig::default()
//!     .with_octaves(1)
//!     .with_divider_range(0x100..0x110)
//!     .with_wrap_max(0x3fff);
//!
//! let table = search(&config).unwrap();
//! assert_eq!(table.len(), 12);
//! assert!(table.unresolved().is_empty());
//!
//! let literal = render_table_literal(&table, "pwmpitch");
//! assert!(literal.contains("pwm_cfgs = ["));
//! ```
//!
//! # Modules
//!
//! - [`config`]: Compile-time constants and [`SearchConfig`]
//! - [`note`]: Target notes, candidates and the note table
//! - [`search`]: Partitioned exhaustive search
//! - [`render`]: Diagnostic lines and the table literal
//! - [`summary`]: Aggregate accuracy figures

pub mod config;
pub mod error;
pub mod note;
pub mod render;
pub mod search;
pub mod summary;

pub use config::{
    divisor, SearchConfig, BASE_NOTE, DIV_RAW_END, DIV_RAW_MIN, NOTE_CNT, OCTAVES, SYS_FREQ_HZ,
    WRAP_MAX,
};
pub use error::TableError;
pub use note::{midi_note_name, target_frequency, Candidate, Note, NoteTable};
pub use render::{
    diagnostic_line, render_diagnostics, render_table_literal, table_entry, PAIRS_PER_LINE,
    TABLE_NAME, UNRESOLVED_LITERAL,
};
pub use search::{
    partition, scan_dividers, search, search_partitions, search_with_progress, NoProgress,
    Progress,
};
pub use summary::{Summary, WorstNote};
