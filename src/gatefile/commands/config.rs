use crate::commands::{CmdMessage, CmdResult, GatefilePaths};
use crate::config::GatefileConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    /// Show one key, or the whole config when no key is given.
    Get(Option<String>),
    Set(String, String),
}

/// Reads or updates `config.json`. Unknown keys and invalid values are
/// returned as errors and nothing is saved.
pub fn run(paths: &GatefilePaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    let mut config = GatefileConfig::load(dir)?;

    let mut result = match action {
        ConfigAction::Get(None) => CmdResult::default(),
        ConfigAction::Get(Some(key)) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(config.get(&key)?));
            result
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(dir)?;
            log::info!("saved {} to {}", key, dir.display());
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            )));
            result
        }
    };
    result.config = Some(config);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::OutputFormat;
    use crate::error::GateError;

    fn paths(dir: &tempfile::TempDir) -> GatefilePaths {
        GatefilePaths {
            config_dir: dir.path().join("cfg"),
        }
    }

    #[test]
    fn test_show_all_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let res = run(&paths(&dir), ConfigAction::Get(None)).unwrap();
        assert_eq!(res.config.unwrap(), GatefileConfig::default());
        assert!(res.messages.is_empty());
    }

    #[test]
    fn test_set_persists() {
        let dir = tempfile::tempdir().unwrap();
        let p = paths(&dir);

        let res = run(&p, ConfigAction::Set("file-ext".into(), "db,gate".into())).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Success);
        assert_eq!(res.messages[0].content, "file-ext set to .db,.gate");

        let res = run(&p, ConfigAction::Set("format".into(), "json".into())).unwrap();
        assert_eq!(res.config.unwrap().format, OutputFormat::Json);

        let res = run(&p, ConfigAction::Get(Some("file-ext".into()))).unwrap();
        assert_eq!(res.messages[0].content, ".db,.gate");
    }

    #[test]
    fn test_bad_value_is_an_error_and_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let p = paths(&dir);

        let err = run(&p, ConfigAction::Set("format".into(), "xml".into())).unwrap_err();
        assert!(matches!(err, GateError::Config(_)));
        assert!(!p.config_dir.join("config.json").exists());
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = paths(&dir);

        let err = run(&p, ConfigAction::Get(Some("nope".into()))).unwrap_err();
        assert!(err.to_string().contains("unknown key: nope"));
        assert!(matches!(
            run(&p, ConfigAction::Set("nope".into(), "1".into())),
            Err(GateError::Config(_))
        ));
    }
}
