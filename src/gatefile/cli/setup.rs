use clap::{Parser, Subcommand, ValueEnum};
use gatefile::config::OutputFormat;
use log::LevelFilter;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
pub fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Summary,
    Json,
    JsonCompact,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Summary => OutputFormat::Summary,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::JsonCompact => OutputFormat::JsonCompact,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gatefile", bin_name = "gatefile", version = get_version())]
#[command(about = "Parse and inspect gate files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Filter log messages more verbose than the given level
    #[arg(
        short,
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        help_heading = "Options"
    )]
    pub log_level: LogLevel,

    /// Override log filters using RUST_LOG style directives
    #[arg(long, global = true, value_name = "FILTERS", help_heading = "Options")]
    pub log_filter: Option<String>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a gate file and print it
    #[command(alias = "p", display_order = 1)]
    Parse {
        /// Path to the gate file
        file: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Write the JSON record to this path instead of printing
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Check that a gate file parses
    #[command(alias = "c", display_order = 2)]
    Check {
        /// Path to the gate file
        file: PathBuf,

        /// Report how many gates parsed before an error
        #[arg(long)]
        partial: bool,
    },

    /// Get or set configuration
    #[command(display_order = 3)]
    Config {
        /// Configuration key (file-ext or format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let cli =
            Cli::try_parse_from(["gatefile", "parse", "w.gate", "-f", "json-compact"]).unwrap();
        match cli.command {
            Commands::Parse {
                file,
                format,
                output,
            } => {
                assert_eq!(file, PathBuf::from("w.gate"));
                assert_eq!(format, Some(FormatArg::JsonCompact));
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gatefile",
            "check",
            "w.gate",
            "--partial",
            "--log-level",
            "debug",
            "--config-dir",
            "/tmp/cfg",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Check { partial: true, .. }));
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Debug);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/cfg")));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        assert!(Cli::try_parse_from(["gatefile", "parse"]).is_err());
    }
}
