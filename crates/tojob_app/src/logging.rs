//! Logger initialization for tojob_app.
//!
//! The level defaults to `Info` and can be overridden through the
//! `TOJOB_LOG_LEVEL` environment variable (`trace`, `debug`, ...).

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./tojob.log";

/// Destination for log output.
pub enum LogDestination {
    /// Write to [`LOG_FILE`] in the current directory.
    File,
    /// Write to the terminal.
    Terminal,
    /// Write to both file and terminal.
    Both,
}

impl LogDestination {
    fn wants_file(&self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }

    fn wants_terminal(&self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }
}

/// Initialize the global logger. A failure to create the log file falls back
/// to whatever destinations remain rather than aborting.
pub fn initialize(destination: LogDestination) {
    let level = level_from_env();
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.wants_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if destination.wants_file() {
        match File::create(Path::new(LOG_FILE)) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!("Warning: could not create {LOG_FILE}: {err}"),
        }
    }

    let _ = CombinedLogger::init(loggers);
}

fn level_from_env() -> LevelFilter {
    std::env::var("TOJOB_LOG_LEVEL")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LevelFilter::Info)
}
