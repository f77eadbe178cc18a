use crate::commands::summary::{summarize, FileSummary};
use crate::commands::{paths, CmdMessage, CmdResult};
use crate::error::{GateError, Result};
use crate::parser;
use std::path::Path;

fn ok_message(summary: &FileSummary) -> CmdMessage {
    CmdMessage::success(format!(
        "{}: OK ({} gates, {} sections, {} items)",
        summary.path,
        summary.gates.len(),
        summary.total_sections,
        summary.total_items
    ))
}

/// Validates a gate file without emitting the record.
///
/// In `partial` mode a parse failure does not abort the command: the result
/// reports how far parsing got and carries the error in `failure`.
pub fn run(path: &Path, allowed_exts: &[String], partial: bool) -> Result<CmdResult> {
    let path = paths::validate(path, allowed_exts)?;

    if !partial {
        let file = parser::parse_file(&path)?;
        let summary = summarize(&file);
        let mut result = CmdResult::default();
        result.add_message(ok_message(&summary));
        return Ok(result.with_summary(summary));
    }

    let (file, error) = parser::parse_file_partial(&path)?;
    let summary = summarize(&file);
    let mut result = CmdResult::default();

    match error {
        None => {
            result.add_message(ok_message(&summary));
            Ok(result.with_summary(summary))
        }
        Some(source) => {
            log::debug!(
                "partial parse of {} stopped at line {}",
                path.display(),
                source.line()
            );
            result.add_message(CmdMessage::warning(format!(
                "{} complete gate(s) before line {}",
                summary.gates.len(),
                source.line()
            )));
            Ok(result.with_summary(summary).with_failure(GateError::Parse {
                path: path.clone(),
                source,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use std::fs;
    use std::path::PathBuf;

    fn write(dir: &tempfile::TempDir, name: &str, text: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_check_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "a.gate", "1 gate 1\na\n  x 1\n\n2 gate 2\n");

        let res = run(&path, &[], false).unwrap();
        assert_eq!(res.messages.len(), 1);
        assert_eq!(res.messages[0].level, MessageLevel::Success);
        assert!(res.messages[0].content.ends_with("OK (2 gates, 1 sections, 1 items)"));
        assert!(res.failure.is_none());
    }

    #[test]
    fn test_check_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "a.gate", "1 gate x\n");

        assert!(matches!(
            run(&path, &[], false),
            Err(GateError::Parse { .. })
        ));
    }

    #[test]
    fn test_check_partial_reports_progress() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "a.gate", "1 gate 1\n\n2 gate 2\n\nbroken\n");

        let res = run(&path, &[], true).unwrap();
        assert_eq!(res.summary.as_ref().unwrap().gates.len(), 2);
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
        assert_eq!(res.messages[0].content, "2 complete gate(s) before line 5");
        match res.failure {
            Some(GateError::Parse { source, .. }) => assert_eq!(source.line(), 5),
            other => panic!("unexpected failure: {other:?}"),
        }
    }

    #[test]
    fn test_check_partial_on_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "a.gate", "1 gate 1\n");

        let res = run(&path, &[], true).unwrap();
        assert!(res.failure.is_none());
        assert_eq!(res.messages[0].level, MessageLevel::Success);
    }
}
