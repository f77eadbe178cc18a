//! # API Facade
//!
//! A thin layer over [`crate::commands`]. It owns the resolved configuration so
//! UI clients only pass file paths and flags, and it returns structured
//! [`CmdResult`] values without printing anything.

use crate::commands;
use crate::config::GatefileConfig;
use crate::error::Result;
use crate::model::GateFile;
use std::path::Path;

pub struct GatefileApi {
    config: GatefileConfig,
    paths: GatefilePaths,
}

impl GatefileApi {
    pub fn new(config: GatefileConfig, paths: GatefilePaths) -> Self {
        Self { config, paths }
    }

    /// Loads the config stored under `paths`, falling back to defaults.
    pub fn load(paths: GatefilePaths) -> Result<Self> {
        let config = GatefileConfig::load(&paths.config_dir)?;
        Ok(Self::new(config, paths))
    }

    pub fn parse(&self, path: &Path) -> Result<CmdResult> {
        commands::parse::run(path, &self.config.file_exts)
    }

    pub fn check(&self, path: &Path, partial: bool) -> Result<CmdResult> {
        commands::check::run(path, &self.config.file_exts, partial)
    }

    pub fn render(&self, file: &GateFile, pretty: bool) -> Result<String> {
        commands::export::render(file, pretty)
    }

    pub fn export(&self, file: &GateFile, pretty: bool, dest: &Path) -> Result<CmdResult> {
        commands::export::run(file, pretty, dest)
    }

    pub fn config_action(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn config(&self) -> &GatefileConfig {
        &self.config
    }

    pub fn paths(&self) -> &GatefilePaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::summary::{FileSummary, GateSummary};
pub use crate::commands::{CmdMessage, CmdResult, GatefilePaths, MessageLevel};
