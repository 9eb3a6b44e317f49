mod cmd;
mod error;
mod logging;

use clap::{Args, Parser, Subcommand};
use promptvars_core::config::loader::{ConfigLoader, default_config_path};
use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "pvars", version, about = "Find and migrate legacy prompt placeholders to ${name}")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List legacy placeholders found in templates
    Detect(DetectArgs),

    /// Rewrite legacy placeholders into ${name} notation
    Convert(ConvertArgs),

    /// Show the recognized placeholder notations in priority order
    Patterns,

    /// Validate configuration and print resolved settings
    Doctor,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Detect(_) => "detect",
            Commands::Convert(_) => "convert",
            Commands::Patterns => "patterns",
            Commands::Doctor => "doctor",
        }
    }
}

#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Files or directories to scan; reads stdin when empty or "-"
    pub paths: Vec<PathBuf>,

    /// Emit JSON instead of one line per placeholder
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Files or directories to convert; reads stdin when empty or "-"
    pub paths: Vec<PathBuf>,

    /// Rewrite files in place
    #[arg(long, conflicts_with = "check")]
    pub write: bool,

    /// Exit with status 1 if any file would change
    #[arg(long)]
    pub check: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let name = cli.command.name();

    let rc = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(rc) => rc,
        Err(e) if cli.config.is_none() => {
            report_failure(name, format_args!("{e}\nlooked for: {}", default_config_path().display()));
            return ExitCode::FAILURE;
        }
        Err(e) => {
            report_failure(name, e);
            return ExitCode::FAILURE;
        }
    };

    let log_guard = match logging::init(&rc) {
        Ok(guard) => guard,
        Err(e) => {
            report_failure(name, e);
            return ExitCode::FAILURE;
        }
    };

    let result = match &cli.command {
        Commands::Detect(args) => cmd::detect::run(&rc, args).map(|()| ExitCode::SUCCESS),
        Commands::Convert(args) => cmd::convert::run(&rc, args),
        Commands::Patterns => {
            cmd::patterns::run();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Doctor => {
            cmd::doctor::run(&rc);
            Ok(ExitCode::SUCCESS)
        }
    };

    let code = result.unwrap_or_else(|e| {
        report_failure(name, e);
        ExitCode::FAILURE
    });

    // Flushes the file logger.
    drop(log_guard);
    code
}

fn report_failure(command: &str, err: impl Display) {
    println!("FAIL pvars {command}");
    println!("{err}");
}
