use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, SimpleLogger, WriteLogger};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    AlreadySet(#[from] log::SetLoggerError),
}

/// Logs to `path`, truncating it.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<(), LoggerError> {
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

pub fn init_stderr_logger(level: LevelFilter) -> Result<(), LoggerError> {
    SimpleLogger::init(level, Config::default())?;
    Ok(())
}

/// File logger, or stderr when the file cannot be created.
pub fn init_logger(path: &Path, level: LevelFilter) -> Result<(), LoggerError> {
    match init_file_logger(path, level) {
        Err(LoggerError::Io(err)) => {
            eprintln!("Cannot log to {}: {err}, using stderr", path.display());
            init_stderr_logger(level)
        }
        other => other,
    }
}
