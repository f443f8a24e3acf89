//! Target notes and their best divider/wrap candidates.

use serde::Serialize;

use crate::config::SearchConfig;
use crate::error::TableError;

/// Note names within an octave, starting at C.
const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Computes the equal-tempered frequency of a table entry.
///
/// Uses `440 * 2^((index + base_note - 69) / 12)`, so the entry whose MIDI
/// number is 69 is exactly 440 Hz.
///
/// # Examples
/// ```
/// use pwmpitch_table::target_frequency;
///
/// assert_eq!(target_frequency(24, 45), 440.0);
/// assert!((target_frequency(0, 45) - 110.0).abs() < 1e-9);
/// ```
pub fn target_frequency(index: usize, base_note: u8) -> f64 {
    440.0 * 2.0_f64.powf((index as f64 + base_note as f64 - 69.0) / 12.0)
}

/// Scientific pitch name of a MIDI note (`69` is `"A4"`).
///
/// # Examples
/// ```
/// use pwmpitch_table::midi_note_name;
///
/// assert_eq!(midi_note_name(69), "A4");
/// assert_eq!(midi_note_name(61), "C#4");
/// assert_eq!(midi_note_name(0), "C-1");
/// ```
pub fn midi_note_name(midi_note: u8) -> String {
    let octave = midi_note as i32 / 12 - 1;
    format!("{}{}", NOTE_NAMES[midi_note as usize % 12], octave)
}

/// One evaluated divider/wrap pair and the frequency it produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    /// Divider register value with 4 fractional bits.
    pub divider_raw: u16,
    /// Real divisor, `divider_raw / 16`.
    pub divisor: f64,
    /// Wrap (TOP) register value.
    pub wrap: u16,
    /// Frequency produced by this pair, in Hz.
    pub output_frequency: f64,
    /// Absolute distance from the note's target frequency, in Hz.
    pub error: f64,
}

impl Candidate {
    /// Returns true if `self` should replace `other` as a note's best.
    ///
    /// Smaller error wins. On exactly equal error the smaller divider wins,
    /// then the smaller wrap, so the outcome never depends on evaluation order.
    pub fn beats(&self, other: &Candidate) -> bool {
        if self.error != other.error {
            return self.error < other.error;
        }
        (self.divider_raw, self.wrap) < (other.divider_raw, other.wrap)
    }
}

/// A target pitch and the best candidate found for it so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    index: usize,
    midi_note: u8,
    target_frequency: f64,
    best: Option<Candidate>,
}

impl Note {
    /// Creates the note at `index` with no candidate.
    pub fn new(index: usize, base_note: u8) -> Self {
        Self {
            index,
            midi_note: base_note.saturating_add(index.min(u8::MAX as usize) as u8),
            target_frequency: target_frequency(index, base_note),
            best: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn midi_note(&self) -> u8 {
        self.midi_note
    }

    pub fn name(&self) -> String {
        midi_note_name(self.midi_note)
    }

    pub fn target_frequency(&self) -> f64 {
        self.target_frequency
    }

    /// Best candidate, or `None` if nothing has been evaluated for this note.
    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.best.is_some()
    }

    /// Error of the current best, or infinity when unresolved.
    #[inline]
    pub fn best_error(&self) -> f64 {
        self.best.map_or(f64::INFINITY, |best| best.error)
    }

    /// Signed error of the best candidate in cents.
    pub fn error_cents(&self) -> Option<f64> {
        self.best
            .map(|best| 1200.0 * (best.output_frequency / self.target_frequency).log2())
    }

    /// Builds the candidate for this note from a divider/wrap evaluation.
    #[inline]
    pub fn candidate(
        &self,
        divider_raw: u16,
        divisor: f64,
        wrap: u16,
        output_frequency: f64,
    ) -> Candidate {
        Candidate {
            divider_raw,
            divisor,
            wrap,
            output_frequency,
            error: (self.target_frequency - output_frequency).abs(),
        }
    }

    /// Offers a candidate; keeps it if it beats the current best.
    ///
    /// Returns true when the note was updated.
    pub fn offer(&mut self, candidate: Candidate) -> bool {
        match &self.best {
            Some(best) if !candidate.beats(best) => false,
            _ => {
                self.best = Some(candidate);
                true
            }
        }
    }
}

/// Ordered notes covering the configured octaves.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteTable {
    notes: Vec<Note>,
}

impl NoteTable {
    /// Builds `octaves * 12` unresolved notes starting at the base note.
    pub fn new(config: &SearchConfig) -> Self {
        let notes = (0..config.note_count())
            .map(|index| Note::new(index, config.base_note))
            .collect();
        Self { notes }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut [Note] {
        &mut self.notes
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Indices of notes without a candidate.
    pub fn unresolved(&self) -> Vec<usize> {
        self.notes
            .iter()
            .filter(|note| !note.is_resolved())
            .map(Note::index)
            .collect()
    }

    /// Folds another table's bests into this one, note by note.
    ///
    /// The per-note rule is a minimum under [`Candidate::beats`], so merging
    /// partial tables in any order and grouping gives the same result.
    pub fn merge(&mut self, other: &NoteTable) -> Result<(), TableError> {
        if self.len() != other.len() {
            return Err(TableError::TableMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        for (note, theirs) in self.notes.iter_mut().zip(&other.notes) {
            if let Some(candidate) = theirs.best {
                note.offer(candidate);
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a NoteTable {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
