//! pwmpitch - PWM divider/wrap table generator
//!
//! Searches every RP2040 PWM divider and wrap value for the pair closest to
//! each note of a five-octave equal-tempered scale, then prints a report and
//! a table literal ready to paste into firmware.

use clap::Parser;
use std::process::ExitCode;

use pwmpitch_cli::commands;

/// pwmpitch - Brute-force PWM pitch table generator
///
/// The clock frequency, note range and register ranges are fixed at build
/// time; there is nothing to configure.
#[derive(Parser)]
#[command(name = "pwmpitch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output a machine-readable JSON document instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::generate::run(cli.json) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_no_arguments() {
        let cli = Cli::try_parse_from(["pwmpitch"]).unwrap();
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parses_json() {
        let cli = Cli::try_parse_from(["pwmpitch", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_rejects_search_parameters() {
        assert!(Cli::try_parse_from(["pwmpitch", "--octaves", "3"]).is_err());
        assert!(Cli::try_parse_from(["pwmpitch", "280000000"]).is_err());
    }
}
