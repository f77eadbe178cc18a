use crate::error::{GateError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// How `parse` renders a gate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
    JsonCompact,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Summary => "summary",
            OutputFormat::Json => "json",
            OutputFormat::JsonCompact => "json-compact",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            "json-compact" => Ok(OutputFormat::JsonCompact),
            other => Err(GateError::Config(format!("unknown format: {}", other))),
        }
    }
}

/// Configuration for gatefile, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatefileConfig {
    /// Extensions accepted for gate files (e.g. ".gate"). Empty accepts any.
    #[serde(default = "default_file_exts")]
    pub file_exts: Vec<String>,

    /// Output format used by `parse` when none is given
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_file_exts() -> Vec<String> {
    vec![".gate".to_string(), ".txt".to_string()]
}

impl Default for GatefileConfig {
    fn default() -> Self {
        Self {
            file_exts: default_file_exts(),
            format: OutputFormat::default(),
        }
    }
}

fn normalize_ext(ext: &str) -> String {
    let ext = ext.trim();
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

fn unknown_key(key: &str) -> GateError {
    GateError::Config(format!(
        "unknown key: {} (expected one of {})",
        key,
        GatefileConfig::keys().join(", ")
    ))
}

impl GatefileConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| GateError::io(&config_path, e))?;
        let config: GatefileConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|e| GateError::io(config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content).map_err(|e| GateError::io(&config_path, e))?;
        Ok(())
    }

    /// Replace the accepted extensions from a comma separated list.
    /// Each entry is normalized to start with a dot.
    pub fn set_file_exts(&mut self, list: &str) {
        self.file_exts = list
            .split(',')
            .filter(|e| !e.trim().is_empty())
            .map(normalize_ext)
            .collect();
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "file-ext" => Ok(self.file_exts.join(",")),
            "format" => Ok(self.format.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "file-ext" => self.set_file_exts(value),
            "format" => self.format = value.parse()?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["file-ext", "format"]
    }
}
