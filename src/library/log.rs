use std::fs::File;
use std::path::PathBuf;

use crate::ProbeSettings;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode, WriteLogger};

/// Where the tool's own diagnostics go.
///
/// The probe result line is never routed through here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogMode {
    None,
    Console,
    #[value(name = "file")]
    FileOnly,
    Both,
}

impl LogMode {
    pub fn writes_file(&self) -> bool {
        matches!(self, LogMode::FileOnly | LogMode::Both)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("a log file is required for this log mode")]
    MissingFile,

    #[error("Failed to create log file at {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to initialize logger: {0}")]
    Init(#[from] log::SetLoggerError),
}

/// Initializes logging: console, file, or both.
///
/// The console logger writes to stderr so stdout only ever carries the
/// success line. Nothing is installed if the log file cannot be created.
pub fn init_logging(settings: &ProbeSettings) -> Result<(), LogError> {
    if settings.log_mode == LogMode::None || settings.verbosity == LevelFilter::Off {
        return Ok(());
    }

    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();

    if settings.log_mode.writes_file() {
        let path = settings.log_path.as_ref().ok_or(LogError::MissingFile)?;
        let file = File::create(path).map_err(|source| LogError::CreateFile {
            path: path.clone(),
            source,
        })?;
        loggers.push(WriteLogger::new(settings.verbosity, Config::default(), file));
    }

    if matches!(settings.log_mode, LogMode::Console | LogMode::Both) {
        loggers.push(TermLogger::new(
            settings.verbosity,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_logging_needs_nothing() {
        let settings = ProbeSettings::default();
        assert!(init_logging(&settings).is_ok());
    }

    #[test]
    fn file_mode_without_path_is_refused() {
        let settings = ProbeSettings {
            log_mode: LogMode::FileOnly,
            log_path: None,
            verbosity: LevelFilter::Debug,
        };
        assert!(matches!(init_logging(&settings), Err(LogError::MissingFile)));
    }

    #[test]
    fn uncreatable_log_file_is_reported_once() {
        let path = std::env::temp_dir()
            .join(format!("imgprobe-log-{}", std::process::id()))
            .join("no_such_dir")
            .join("run.log");
        let settings = ProbeSettings {
            log_mode: LogMode::Both,
            log_path: Some(path.clone()),
            verbosity: LevelFilter::Debug,
        };

        match init_logging(&settings) {
            Err(e @ LogError::CreateFile { .. }) => {
                let message = e.to_string();
                assert!(message.starts_with(&format!("Failed to create log file at {}", path.display())));
                assert!(!message.contains('\n'));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!path.exists());
    }
}
