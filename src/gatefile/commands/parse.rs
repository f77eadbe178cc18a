use crate::commands::summary::summarize;
use crate::commands::{paths, CmdResult};
use crate::error::Result;
use crate::parser;
use std::path::Path;

/// Validates `path`, parses it, and returns the record with its summary.
pub fn run(path: &Path, allowed_exts: &[String]) -> Result<CmdResult> {
    let path = paths::validate(path, allowed_exts)?;
    let file = parser::parse_file(&path)?;

    log::debug!(
        "parsed {} gate(s), {} section(s), {} item(s) from {}",
        file.gates.len(),
        file.section_count(),
        file.item_count(),
        path.display()
    );

    let summary = summarize(&file);
    Ok(CmdResult::default()
        .with_summary(summary)
        .with_gate_file(file))
}
