//! # Gatefile Architecture
//!
//! Gatefile reads "gate" files: a small, indentation-structured text format
//! describing gates, their named sections, and the items (with quantities)
//! each section holds. The crate is a library first; the `gatefile` binary is
//! one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, formats output        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the loaded config        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Path validation, parse, check, summary, export, config   │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser.rs) + Model (model.rs)                      │
//! │  - Pure line scanner producing GateFile → Gate → Section →  │
//! │    Item; no logging, no global state                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parsing directly
//!
//! ```
//! let file = gatefile::parser::parse_str("inline", "1 gate 100\nlanding\n  sword 3\n").unwrap();
//! assert_eq!(file.gates[0].sections[0].items[0].quantity, 3);
//! ```
//!
//! ## Module Overview
//!
//! - [`parser`]: the gate file scanner
//! - [`model`]: `GateFile`, `Gate`, `Section`, `Item`
//! - [`api`]: the facade used by UI clients
//! - [`commands`]: operations over parsed files
//! - [`config`]: `config.json` handling
//! - [`error`]: error types
//! - `cli`: argument parsing and terminal output for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
