// Command-line entry point - convert text or JSON, manage corrections, or run the HTTP server

use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::mapping::{CorrectionStore, StoreError};
use crate::service::{ConversionService, ConvertError, InitError};
use crate::util::run_async;

#[derive(Parser)]
#[command(
    name = "kiwispell",
    version,
    about = "Rewrite American and British English spelling as New Zealand English"
)]
struct Cli {
    /// JSON config file (bundled resources when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Convert text given as an argument, or read from stdin
    Convert { text: Option<String> },
    /// Convert every string in a JSON document read from a file or stdin
    ConvertJson { file: Option<PathBuf> },
    /// Run the HTTP server
    Serve {
        /// Bind address, overrides the config file
        #[arg(long)]
        bind: Option<String>,
    },
    /// Manage persisted corrections
    Corrections {
        #[command(subcommand)]
        action: CorrectionsCmd,
    },
}

#[derive(Subcommand)]
enum CorrectionsCmd {
    /// List corrections as a JSON object
    List,
    /// Add or replace a correction
    Add { phrase: String, replacement: String },
    /// Remove a correction
    Remove { phrase: String },
    /// Remove every correction
    Clear,
}

/// Error types for CLI commands
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Init(#[from] InitError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Install the stderr log subscriber: Debug in debug builds, Info in release
fn init_logging() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

fn read_stdin() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn ready_service(config: Config) -> Result<ConversionService, CliError> {
    let service = ConversionService::new(config);
    run_async(service.initialize())??;
    Ok(service)
}

fn convert(config: Config, text: Option<String>) -> Result<(), CliError> {
    let service = ready_service(config)?;
    match text {
        Some(text) => println!("{}", service.convert(&text)?),
        None => print!("{}", service.convert(&read_stdin()?)?),
    }
    Ok(())
}

fn convert_json(config: Config, file: Option<PathBuf>) -> Result<(), CliError> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => read_stdin()?,
    };
    let value: serde_json::Value = serde_json::from_str(&input)?;
    let service = ready_service(config)?;
    let converted = service.convert_object(&value)?;
    println!("{}", serde_json::to_string_pretty(&converted)?);
    Ok(())
}

fn serve(mut config: Config, bind: Option<String>) -> Result<(), CliError> {
    if bind.is_some() {
        config.bind = bind;
    }
    let service = Arc::new(ConversionService::new(config));
    run_async(crate::server::serve(service))??;
    Ok(())
}

fn corrections(config: Config, action: CorrectionsCmd) -> Result<(), CliError> {
    let store = CorrectionStore::open(config.corrections_path()?)?;
    match action {
        CorrectionsCmd::List => {
            let map: serde_json::Map<String, serde_json::Value> = store
                .list()
                .into_iter()
                .map(|e| (e.phrase, serde_json::Value::String(e.replacement)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
        CorrectionsCmd::Add {
            phrase,
            replacement,
        } => {
            store.add([(phrase, replacement)])?;
        }
        CorrectionsCmd::Remove { phrase } => store.remove(&phrase)?,
        CorrectionsCmd::Clear => store.clear()?,
    }
    Ok(())
}

/// Parse arguments and run the selected command
pub fn run() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = Config::load(cli.config.as_deref())
        .map_err(CliError::from)
        .and_then(|config| match cli.cmd {
            Cmd::Convert { text } => convert(config, text),
            Cmd::ConvertJson { file } => convert_json(config, file),
            Cmd::Serve { bind } => serve(config, bind),
            Cmd::Corrections { action } => corrections(config, action),
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            crate::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
