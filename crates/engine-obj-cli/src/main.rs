//! engine-obj - inspect, check and normalize engine OBJ assets.
//!
//! Usage:
//!   engine-obj info level.obj               List objects and materials
//!   engine-obj check level.obj              Exit 1 if the file is rejected
//!   engine-obj convert in.obj out.obj       Re-emit in the exporter's form

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use engine_obj::CodecConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use output::Output;

#[derive(Parser, Debug)]
#[command(name = "engine-obj", version, about = "OBJ/MTL tools for engine assets")]
struct Cli {
    /// TOML file with codec settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Import a file and describe its objects and materials
    Info {
        /// OBJ file to read
        input: PathBuf,
    },

    /// Import a file and report whether the engine would accept it
    Check {
        /// OBJ file to read
        input: PathBuf,
    },

    /// Import a file and export it again
    Convert {
        /// OBJ file to read
        input: PathBuf,

        /// OBJ file to write; the MTL library is written beside it
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("engine_obj={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<CodecConfig> {
    let Some(path) = path else {
        return Ok(CodecConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config = CodecConfig::from_toml(&text)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;

    debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let out = Output::new(cli.format, cli.quiet);

    match cli.command {
        Commands::Info { input } => commands::info::run(&input, &config, &out)?,
        Commands::Check { input } => {
            if !commands::check::run(&input, &config, &out) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Convert { input, output } => {
            commands::convert::run(&input, &output, &config, &out)?
        }
    }

    Ok(ExitCode::SUCCESS)
}
