use crate::config::GatefileConfig;
use crate::error::GateError;
use crate::model::GateFile;
use std::path::PathBuf;

pub mod check;
pub mod config;
pub mod export;
pub mod parse;
pub mod paths;
pub mod summary;

use summary::FileSummary;

/// Where gatefile looks for its configuration.
#[derive(Debug, Clone)]
pub struct GatefilePaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub gate_file: Option<GateFile>,
    pub summary: Option<FileSummary>,
    pub config: Option<GatefileConfig>,
    pub messages: Vec<CmdMessage>,
    /// Set when a command finished its report but the input was still invalid.
    pub failure: Option<GateError>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_gate_file(mut self, file: GateFile) -> Self {
        self.gate_file = Some(file);
        self
    }

    pub fn with_summary(mut self, summary: FileSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_config(mut self, config: GatefileConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_failure(mut self, failure: GateError) -> Self {
        self.failure = Some(failure);
        self
    }
}
