//! pwmpitch CLI library.
//!
//! This crate provides the command implementations behind the `pwmpitch`
//! binary: running the divider/wrap search with the built-in configuration,
//! drawing progress on the terminal and printing the report.

pub mod commands;
pub mod progress;
