//! Terminal progress line.

use std::io::{self, Write};
use std::sync::Mutex;

use pwmpitch_table::Progress;

/// Blank line drawn over the last progress value.
const CLEAR_LINE: &str = "\r             \n";

/// Draws the current divisor on a single, repeatedly overwritten line.
pub struct TerminalProgress<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn draw(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            // Write errors are ignored; progress never affects the search.
            let _ = out.write_all(text.as_bytes());
            let _ = out.flush();
        }
    }
}

impl<W: Write + Send> Progress for TerminalProgress<W> {
    fn divider_started(&self, _divider_raw: u16, divisor: f64) {
        self.draw(&format!("\r{:6.2}    ", divisor));
    }

    fn finished(&self) {
        self.draw(CLEAR_LINE);
    }
}
