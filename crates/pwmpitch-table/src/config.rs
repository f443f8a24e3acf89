//! Search configuration.
//!
//! The generator runs with the fixed values below. [`SearchConfig`] exists so
//! library users and tests can shrink the search space; the command line never
//! changes it.

use std::ops::Range;
use std::thread;

use crate::error::TableError;

/// System clock feeding the PWM slice, in Hz.
pub const SYS_FREQ_HZ: u32 = 280_000_000;

/// MIDI number of the first note in the table (A2).
pub const BASE_NOTE: u8 = 69 - 24;

/// Number of octaves covered by the table.
pub const OCTAVES: u8 = 5;

/// Number of notes in the table.
pub const NOTE_CNT: usize = OCTAVES as usize * 12;

/// Smallest divider raw value (divisor 1.0).
pub const DIV_RAW_MIN: u16 = 1 << 4;

/// Exclusive upper bound of the divider raw value (8 integer bits, 4 fractional).
pub const DIV_RAW_END: u16 = 1 << 12;

/// Largest wrap (TOP) value of the 16-bit counter.
pub const WRAP_MAX: u16 = u16::MAX;

/// Highest valid MIDI note number.
const MIDI_MAX: u32 = 127;

/// Parameters of one exhaustive search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Clock frequency before the divider, in Hz.
    pub clock_hz: u32,
    /// MIDI number of note index 0.
    pub base_note: u8,
    /// Number of octaves (12 notes each).
    pub octaves: u8,
    /// Divider raw values to scan, `DIV_RAW_MIN..DIV_RAW_END` at most.
    pub divider_range: Range<u16>,
    /// Wrap values `0..=wrap_max` are scanned for every divider.
    pub wrap_max: u16,
    /// Number of worker threads, and therefore divider partitions.
    pub workers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            clock_hz: SYS_FREQ_HZ,
            base_note: BASE_NOTE,
            octaves: OCTAVES,
            divider_range: DIV_RAW_MIN..DIV_RAW_END,
            wrap_max: WRAP_MAX,
            workers: default_workers(),
        }
    }
}

impl SearchConfig {
    /// Sets the clock frequency.
    pub fn with_clock_hz(mut self, clock_hz: u32) -> Self {
        self.clock_hz = clock_hz;
        self
    }

    /// Sets the MIDI number of the first note.
    pub fn with_base_note(mut self, base_note: u8) -> Self {
        self.base_note = base_note;
        self
    }

    /// Sets the number of octaves.
    pub fn with_octaves(mut self, octaves: u8) -> Self {
        self.octaves = octaves;
        self
    }

    /// Restricts the divider raw values to scan.
    pub fn with_divider_range(mut self, divider_range: Range<u16>) -> Self {
        self.divider_range = divider_range;
        self
    }

    /// Restricts the wrap values to `0..=wrap_max`.
    pub fn with_wrap_max(mut self, wrap_max: u16) -> Self {
        self.wrap_max = wrap_max;
        self
    }

    /// Sets the number of worker threads.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Number of notes the table holds.
    pub fn note_count(&self) -> usize {
        self.octaves as usize * 12
    }

    /// Checks that the configuration describes a non-empty, representable search.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.clock_hz == 0 {
            return Err(TableError::ZeroClock);
        }
        if self.octaves == 0 {
            return Err(TableError::NoOctaves);
        }

        let highest = self.base_note as u32 + self.note_count() as u32 - 1;
        if highest > MIDI_MAX {
            return Err(TableError::NoteOutOfRange { highest });
        }

        let Range { start, end } = self.divider_range;
        if start >= end {
            return Err(TableError::EmptyDividerRange { start, end });
        }
        if start < DIV_RAW_MIN || end > DIV_RAW_END {
            return Err(TableError::DividerOutOfRange {
                start,
                end,
                min: DIV_RAW_MIN,
                max: DIV_RAW_END,
            });
        }

        if self.workers == 0 {
            return Err(TableError::InvalidWorkerCount);
        }

        Ok(())
    }
}

/// Converts a divider raw value to its real divisor.
pub fn divisor(divider_raw: u16) -> f64 {
    divider_raw as f64 * 0.0625
}

fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = SearchConfig::default();
        assert_eq!(config.clock_hz, 280_000_000);
        assert_eq!(config.base_note, 45);
        assert_eq!(config.octaves, 5);
        assert_eq!(config.divider_range, 16..4096);
        assert_eq!(config.wrap_max, 65535);
        assert!(config.workers >= 1);
        assert_eq!(config.note_count(), NOTE_CNT);
        assert_eq!(NOTE_CNT, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_divisor_has_four_fractional_bits() {
        assert_eq!(divisor(16), 1.0);
        assert_eq!(divisor(17), 1.0625);
        assert_eq!(divisor(4095), 255.9375);
    }

    #[test]
    fn test_validate_rejects_zero_clock() {
        let config = SearchConfig::default().with_clock_hz(0);
        assert_eq!(config.validate(), Err(TableError::ZeroClock));
    }

    #[test]
    fn test_validate_rejects_zero_octaves() {
        let config = SearchConfig::default().with_octaves(0);
        assert_eq!(config.validate(), Err(TableError::NoOctaves));
    }

    #[test]
    fn test_validate_rejects_notes_past_midi_range() {
        let config = SearchConfig::default().with_base_note(120);
        assert_eq!(
            config.validate(),
            Err(TableError::NoteOutOfRange { highest: 179 })
        );

        // 68 + 60 - 1 = 127 is still fine.
        let config = SearchConfig::default().with_base_note(68);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_divider_range() {
        let config = SearchConfig::default().with_divider_range(100..100);
        assert_eq!(
            config.validate(),
            Err(TableError::EmptyDividerRange {
                start: 100,
                end: 100
            })
        );
    }

    #[test]
    fn test_validate_rejects_divider_below_one() {
        let config = SearchConfig::default().with_divider_range(8..64);
        assert!(matches!(
            config.validate(),
            Err(TableError::DividerOutOfRange { start: 8, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_divider_past_register() {
        let config = SearchConfig::default().with_divider_range(16..4097);
        assert!(matches!(
            config.validate(),
            Err(TableError::DividerOutOfRange { end: 4097, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let config = SearchConfig::default().with_workers(0);
        assert_eq!(config.validate(), Err(TableError::InvalidWorkerCount));
    }
}
