//! # CLI Layer
//!
//! One client of the gatefile library. This is the only place that:
//! - Parses process arguments (clap)
//! - Configures logging (`--log-level`, `--log-filter`)
//! - Writes to stdout/stderr
//!
//! Errors bubble up to `main`, which prints them and exits with status 1.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions and the version string
//! - `commands.rs`: `run()`, logging/config setup, per-command handlers
//! - `print.rs`: terminal formatting of messages, summaries and config

mod commands;
mod print;
mod setup;

pub use commands::run;
