//! Integration tests for the exhaustive divider/wrap search.
//!
//! Reduced search spaces are checked pair by pair against a direct scan.
//! The full-size search is `#[ignore]`d; run it with:
//!
//! ```bash
//! cargo test --release -p pwmpitch-table --test search_exhaustive -- --ignored
//! ```

use pwmpitch_table::{
    divisor, render_table_literal, search, target_frequency, SearchConfig, DIV_RAW_END,
    DIV_RAW_MIN, NOTE_CNT, WRAP_MAX,
};

// =============================================================================
// Helper Functions
// =============================================================================

/// Eight dividers around /64 with the full wrap range: outputs span
/// roughly 67 Hz upward, covering A2..G#4.
fn reduced_config() -> SearchConfig {
    SearchConfig::default()
        .with_octaves(2)
        .with_divider_range(0x400..0x408)
        .with_wrap_max(WRAP_MAX)
        .with_workers(4)
}

/// Smallest error any pair in the configured space achieves for `target`.
fn direct_min_error(config: &SearchConfig, target: f64) -> f64 {
    let mut min = f64::INFINITY;
    for divider_raw in config.divider_range.clone() {
        let freq_div = config.clock_hz as f64 / divisor(divider_raw);
        for wrap in 0..=config.wrap_max {
            let out = freq_div / (wrap as f64 + 1.0);
            min = min.min((target - out).abs());
        }
    }
    min
}

// =============================================================================
// Exhaustiveness
// =============================================================================

#[test]
fn test_best_error_matches_output_frequency() {
    let table = search(&reduced_config()).unwrap();
    for note in &table {
        let best = note.best().expect("every note resolves in a non-empty space");
        assert_eq!(
            best.error,
            (note.target_frequency() - best.output_frequency).abs()
        );
    }
}

#[test]
fn test_no_pair_beats_the_best() {
    let config = reduced_config();
    let table = search(&config).unwrap();
    for note in &table {
        let best = note.best().unwrap();
        let direct = direct_min_error(&config, note.target_frequency());
        assert_eq!(
            best.error, direct,
            "note {} has error {} but {} is reachable",
            note.index(), best.error, direct
        );
    }
}

#[test]
fn test_best_pair_reproduces_output_frequency() {
    let config = reduced_config();
    let table = search(&config).unwrap();
    for note in &table {
        let best = note.best().unwrap();
        assert_eq!(best.divisor, divisor(best.divider_raw));
        let out = config.clock_hz as f64 / best.divisor / (best.wrap as f64 + 1.0);
        assert_eq!(out, best.output_frequency);
    }
}

#[test]
fn test_results_stay_inside_search_bounds() {
    let config = reduced_config();
    let table = search(&config).unwrap();
    for note in &table {
        let best = note.best().unwrap();
        assert!(config.divider_range.contains(&best.divider_raw));
        assert!(best.wrap <= config.wrap_max);
    }
}

#[test]
fn test_higher_notes_use_smaller_periods() {
    let config = reduced_config();
    let table = search(&config).unwrap();
    let periods: Vec<f64> = table
        .iter()
        .map(|note| {
            let best = note.best().unwrap();
            best.divisor * (best.wrap as f64 + 1.0)
        })
        .collect();
    for pair in periods.windows(2) {
        assert!(pair[0] > pair[1]);
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_worker_counts_agree() {
    let config = reduced_config();
    let reference = search(&config.clone().with_workers(1)).unwrap();
    for workers in [2, 3, 5, 32, 64] {
        let table = search(&config.clone().with_workers(workers)).unwrap();
        assert_eq!(table, reference, "workers = {}", workers);
    }
}

// =============================================================================
// Full-size search
// =============================================================================

#[test]
fn test_default_table_shape() {
    let config = SearchConfig::default();
    assert_eq!(config.note_count(), NOTE_CNT);
    assert_eq!(target_frequency(24, config.base_note), 440.0);
    assert_eq!(config.divider_range, DIV_RAW_MIN..DIV_RAW_END);
    assert_eq!(config.wrap_max, WRAP_MAX);
}

#[test]
#[ignore] // Full 4080 x 65536 x 60 scan; run with --release --ignored
fn test_default_search_end_to_end() {
    let table = search(&SearchConfig::default()).unwrap();
    assert_eq!(table.len(), 60);
    assert!(table.unresolved().is_empty());

    for note in &table {
        let best = note.best().unwrap();
        assert!((16..=4095).contains(&best.divider_raw));
        // A 280 MHz clock lands every note within a small fraction of a hertz.
        assert!(best.error < 0.05, "note {} error {}", note.index(), best.error);
    }

    let a4 = table.get(24).and_then(|note| note.best()).unwrap();
    assert!((a4.output_frequency - 440.0).abs() < 0.01);

    let literal = render_table_literal(&table, "pwmpitch");
    let pairs = literal.matches("(0x").count();
    assert_eq!(pairs, 60);
    let body: Vec<&str> = literal.lines().skip(2).collect();
    assert_eq!(body.len(), 9);
}
