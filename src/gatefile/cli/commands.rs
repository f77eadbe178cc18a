use super::print::{print_config, print_messages, print_summary};
use super::setup::{Cli, Commands, FormatArg};
use clap::Parser;
use directories::ProjectDirs;
use env_logger::{Builder, Target};
use gatefile::api::{ConfigAction, GatefileApi, GatefilePaths};
use gatefile::config::OutputFormat;
use gatefile::error::{GateError, Result};
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli);

    let api = init_api(&cli)?;
    log::debug!("config dir: {}", api.paths().config_dir.display());

    let result = match cli.command {
        Commands::Parse {
            file,
            format,
            output,
        } => handle_parse(&api, file, format, output),
        Commands::Check { file, partial } => handle_check(&api, file, partial),
        Commands::Config { key, value } => handle_config(&api, key, value),
    };

    if let Err(e) = &result {
        log::debug!("command failed: {:?}", e);
    }
    result
}

fn setup_logging(cli: &Cli) {
    let mut logger = Builder::new();

    if let Some(filters) = &cli.log_filter {
        logger.parse_filters(filters.as_str());
    } else {
        logger.filter_level(cli.log_level.into());
    }

    // stdout carries the parsed record, so logs go to stderr
    logger.target(Target::Stderr).init();
}

fn resolve_config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "gatefile", "gatefile")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| GateError::Config("could not determine a config directory".to_string()))
}

fn init_api(cli: &Cli) -> Result<GatefileApi> {
    let config_dir = resolve_config_dir(cli)?;
    GatefileApi::load(GatefilePaths { config_dir })
}

fn handle_parse(
    api: &GatefileApi,
    path: PathBuf,
    format: Option<FormatArg>,
    output: Option<PathBuf>,
) -> Result<()> {
    let format = format
        .map(OutputFormat::from)
        .unwrap_or(api.config().format);

    let result = api.parse(&path)?;
    let Some(file) = result.gate_file else {
        return Ok(());
    };

    if let Some(dest) = output {
        let pretty = format != OutputFormat::JsonCompact;
        let exported = api.export(&file, pretty, &dest)?;
        print_messages(&exported.messages);
        return Ok(());
    }

    match format {
        OutputFormat::Summary => {
            if let Some(summary) = &result.summary {
                print_summary(&file, summary);
            }
        }
        OutputFormat::Json => println!("{}", api.render(&file, true)?),
        OutputFormat::JsonCompact => println!("{}", api.render(&file, false)?),
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(api: &GatefileApi, path: PathBuf, partial: bool) -> Result<()> {
    let result = api.check(&path, partial)?;
    print_messages(&result.messages);
    match result.failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn handle_config(api: &GatefileApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
        (key, _) => ConfigAction::Get(key),
    };

    let show_all = matches!(action, ConfigAction::Get(None));
    let result = api.config_action(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
