//! Aggregate accuracy figures for a finished table.

use serde::Serialize;

use crate::note::NoteTable;

/// Accuracy summary over all resolved notes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of notes in the table.
    pub note_count: usize,
    /// Number of notes with a configuration.
    pub resolved: usize,
    /// Indices of notes without a configuration.
    pub unresolved: Vec<usize>,
    /// Largest absolute error in Hz, with the note it belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_error: Option<WorstNote>,
    /// Mean absolute error in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_error_hz: Option<f64>,
    /// Largest absolute error in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_error_cents: Option<f64>,
}

/// The note with the largest error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorstNote {
    pub index: usize,
    pub error_hz: f64,
}

impl Summary {
    pub fn from_table(table: &NoteTable) -> Self {
        let mut resolved = 0;
        let mut total_error = 0.0;
        let mut max_error: Option<WorstNote> = None;
        let mut max_error_cents: Option<f64> = None;

        for note in table {
            let Some(best) = note.best() else {
                continue;
            };
            resolved += 1;
            total_error += best.error;

            if max_error.map_or(true, |worst| best.error > worst.error_hz) {
                max_error = Some(WorstNote {
                    index: note.index(),
                    error_hz: best.error,
                });
            }
            if let Some(cents) = note.error_cents().map(f64::abs) {
                max_error_cents = Some(max_error_cents.map_or(cents, |m| m.max(cents)));
            }
        }

        Self {
            note_count: table.len(),
            resolved,
            unresolved: table.unresolved(),
            max_error,
            mean_error_hz: (resolved > 0).then(|| total_error / resolved as f64),
            max_error_cents,
        }
    }

    pub fn all_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }
}
