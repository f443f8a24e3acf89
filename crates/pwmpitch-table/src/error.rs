//! Error types for search configuration and table handling.

use thiserror::Error;

/// Errors raised while validating a [`SearchConfig`](crate::SearchConfig) or
/// combining note tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The system clock frequency is zero.
    #[error("system clock frequency must be non-zero")]
    ZeroClock,

    /// No octaves were requested, so the table would be empty.
    #[error("octave count must be at least 1")]
    NoOctaves,

    /// The highest note in the table is beyond the MIDI range.
    #[error("note range ends at MIDI {highest}, beyond the maximum of 127")]
    NoteOutOfRange {
        /// MIDI number of the highest requested note.
        highest: u32,
    },

    /// The divider raw range contains no values.
    #[error("divider range {start:#x}..{end:#x} is empty")]
    EmptyDividerRange { start: u16, end: u16 },

    /// The divider raw range leaves the 8.4 fixed-point register range.
    #[error("divider range {start:#x}..{end:#x} is outside {min:#x}..{max:#x}")]
    DividerOutOfRange {
        start: u16,
        end: u16,
        min: u16,
        max: u16,
    },

    /// Zero worker threads were requested.
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    /// Two tables with different note counts cannot be merged.
    #[error("cannot merge a table of {actual} notes into a table of {expected} notes")]
    TableMismatch { expected: usize, actual: usize },
}
