use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GateError, Result};
use crate::model::GateFile;
use std::fs;
use std::path::Path;

pub fn render(file: &GateFile, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(file)?
    } else {
        serde_json::to_string(file)?
    };
    Ok(text)
}

/// Writes the record as JSON to `dest`, replacing any existing file.
pub fn run(file: &GateFile, pretty: bool, dest: &Path) -> Result<CmdResult> {
    let mut text = render(file, pretty)?;
    text.push('\n');
    fs::write(dest, text).map_err(|e| GateError::io(dest, e))?;

    log::info!("wrote {} gate(s) to {}", file.gates.len(), dest.display());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} gate(s) to {}",
        file.gates.len(),
        dest.display()
    )));
    Ok(result)
}
