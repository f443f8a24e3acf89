//! Exhaustive divider/wrap search.
//!
//! The divider range is cut into contiguous partitions. Each partition is
//! scanned by its own scoped thread into a private [`NoteTable`], and the
//! partial tables are folded together with [`NoteTable::merge`]. Because the
//! per-note update is a pure minimum, the result does not depend on how the
//! range is partitioned or in which order workers finish.

use std::ops::Range;
use std::panic;
use std::thread;

use crate::config::{divisor, SearchConfig};
use crate::error::TableError;
use crate::note::NoteTable;

/// Receives progress while a search runs.
///
/// Calls arrive from every worker thread concurrently.
pub trait Progress: Sync {
    /// A worker started scanning a divider value.
    fn divider_started(&self, divider_raw: u16, divisor: f64);

    /// All workers have finished.
    fn finished(&self) {}
}

/// Progress sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn divider_started(&self, _divider_raw: u16, _divisor: f64) {}
}

/// Runs the search for `config` without progress reporting.
pub fn search(config: &SearchConfig) -> Result<NoteTable, TableError> {
    search_with_progress(config, &NoProgress)
}

/// Runs the search, splitting the divider range into `config.workers` partitions.
pub fn search_with_progress<P>(config: &SearchConfig, progress: &P) -> Result<NoteTable, TableError>
where
    P: Progress + ?Sized,
{
    config.validate()?;
    let partitions = partition(config.divider_range.clone(), config.workers);
    search_partitions(config, &partitions, progress)
}

/// Runs the search over explicit divider partitions, one thread each.
///
/// Every partition must lie inside `config.divider_range`. Overlapping
/// partitions are allowed and do not change the result.
pub fn search_partitions<P>(
    config: &SearchConfig,
    partitions: &[Range<u16>],
    progress: &P,
) -> Result<NoteTable, TableError>
where
    P: Progress + ?Sized,
{
    config.validate()?;
    for dividers in partitions {
        if dividers.start < config.divider_range.start || dividers.end > config.divider_range.end
        {
            return Err(TableError::DividerOutOfRange {
                start: dividers.start,
                end: dividers.end,
                min: config.divider_range.start,
                max: config.divider_range.end,
            });
        }
    }

    let partials: Vec<NoteTable> = thread::scope(|scope| {
        let handles: Vec<_> = partitions
            .iter()
            .cloned()
            .map(|dividers| {
                scope.spawn(move || {
                    let mut local = NoteTable::new(config);
                    scan_dividers(&mut local, config, dividers, progress);
                    local
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect()
    });
    progress.finished();

    let mut table = NoteTable::new(config);
    for partial in &partials {
        table.merge(partial)?;
    }
    Ok(table)
}

/// Scans every wrap value for each divider in `dividers`, updating `table`.
///
/// This is the body of one worker. Dividers and wraps are visited in
/// ascending order.
pub fn scan_dividers<P>(
    table: &mut NoteTable,
    config: &SearchConfig,
    dividers: Range<u16>,
    progress: &P,
) where
    P: Progress + ?Sized,
{
    let clock_hz = config.clock_hz as f64;

    for divider_raw in dividers {
        let divisor = divisor(divider_raw);
        progress.divider_started(divider_raw, divisor);
        let freq_div = clock_hz / divisor;

        for wrap in 0..=config.wrap_max {
            let output_frequency = freq_div / (wrap as f64 + 1.0);
            for note in table.notes_mut() {
                let error = (note.target_frequency() - output_frequency).abs();
                // Ties still go through `offer` so the tie-break applies.
                if error <= note.best_error() {
                    let candidate = note.candidate(divider_raw, divisor, wrap, output_frequency);
                    note.offer(candidate);
                }
            }
        }
    }
}

/// Splits `range` into at most `parts` contiguous, non-empty pieces.
///
/// Earlier pieces take the remainder, so lengths differ by at most one.
pub fn partition(range: Range<u16>, parts: usize) -> Vec<Range<u16>> {
    let len = range.len();
    if len == 0 {
        return Vec::new();
    }
    let parts = parts.clamp(1, len);
    let base = len / parts;
    let extra = len % parts;

    let mut out = Vec::with_capacity(parts);
    let mut start = range.start;
    for i in 0..parts {
        let size = (base + usize::from(i < extra)) as u16;
        out.push(start..start + size);
        start += size;
    }
    out
}
