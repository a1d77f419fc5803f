//! `libra` CLI: runs a single script file and prints its result, the way
//! the original's `shell.py` ran a fixed test script. Not a REPL — see
//! `SPEC_FULL.md`'s "External Interfaces" section for why.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::error;

/// Verbosity levels exposed on the CLI, mapped onto `log::Level`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "libra", about = "Run a Libra script")]
struct Cli {
    /// Script to execute.
    script: PathBuf,

    /// Logging verbosity.
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    simple_logger::init_with_level((&cli.log_level).into()).expect("failed to initialise logger");

    let source = match fs::read_to_string(&cli.script) {
        Ok(source) => source,
        Err(e) => {
            error!("could not read {}: {e}", cli.script.display());
            return ExitCode::FAILURE;
        }
    };

    let file_name = cli.script.display().to_string();
    match libra::run(&file_name, &source) {
        Ok(value) => {
            println!("{}", value.debug_render());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
