use crate::error::{GateError, Result};
use std::path::{Path, PathBuf};

/// Checks that `path` names an existing regular file with an accepted extension.
///
/// Extensions are compared case-insensitively, dot included. An empty
/// `allowed_exts` accepts any extension, including none.
pub fn validate(path: &Path, allowed_exts: &[String]) -> Result<PathBuf> {
    if !path.exists() {
        return Err(GateError::Path(format!("{} does not exist", path.display())));
    }
    if !path.is_file() {
        return Err(GateError::Path(format!("{} is not a file", path.display())));
    }

    if !allowed_exts.is_empty() {
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let accepted = allowed_exts.iter().any(|a| a.eq_ignore_ascii_case(&ext));
        if !accepted {
            return Err(GateError::Path(format!(
                "{} does not have an accepted extension ({})",
                path.display(),
                allowed_exts.join(", ")
            )));
        }
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn exts() -> Vec<String> {
        vec![".gate".to_string()]
    }

    #[test]
    fn test_accepts_matching_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.gate");
        fs::write(&path, "").unwrap();

        assert_eq!(validate(&path, &exts()).unwrap(), path);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("WORLD.GATE");
        fs::write(&path, "").unwrap();

        assert!(validate(&path, &exts()).is_ok());
    }

    #[test]
    fn test_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate(&dir.path().join("nope.gate"), &exts()).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("dir.gate");
        fs::create_dir(&sub).unwrap();

        let err = validate(&sub, &exts()).unwrap_err();
        assert!(err.to_string().contains("is not a file"));
    }

    #[test]
    fn test_rejects_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        fs::write(&path, "").unwrap();

        let err = validate(&path, &exts()).unwrap_err();
        assert!(matches!(err, GateError::Path(_)));
        assert!(err.to_string().contains(".gate"));
    }

    #[test]
    fn test_empty_list_accepts_anything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noext");
        fs::write(&path, "").unwrap();

        assert!(validate(&path, &[]).is_ok());
    }
}
