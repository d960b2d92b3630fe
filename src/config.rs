use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};
use imgprobe::{LogMode, ProbeSettings};
use log::LevelFilter;

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

// CONFIGURATION //

#[derive(Parser, Debug)]
#[command(name = "imgprobe", version, about)]
pub struct Cli {
    /// Image file to probe
    path: PathBuf,

    /// Log output: none, file, console, both
    #[arg(short, long, value_enum, default_value_t = LogMode::None)]
    log: LogMode,

    /// Log file, required for `--log file|both`
    #[arg(
        long,
        value_name = "FILE",
        required_if_eq_any([("log", "file"), ("log", "both")])
    )]
    log_file: Option<PathBuf>,

    /// Diagnostic detail: off, error, warn, info, debug, trace
    #[arg(short, long, env = "IMGPROBE_VERBOSITY", default_value = "debug")]
    verbosity: LevelFilter,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub log_mode: LogMode,
    pub log_path: Option<PathBuf>,
    pub verbosity: LevelFilter,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            path: cli.path,
            log_mode: cli.log,
            log_path: cli.log_file,
            verbosity: cli.verbosity,
        }
    }
}

pub fn command() -> clap::Command {
    Cli::command()
        .long_version(format!(
            "{} ({}, {})",
            env!("CARGO_PKG_VERSION"),
            BUILD_DATE,
            BUILD_PROFILE
        ))
        .after_help(format!(
            "© {} {} - Licensed under {}",
            BUILD_YEAR,
            env!("CARGO_PKG_AUTHORS"),
            env!("CARGO_PKG_LICENSE")
        ))
}

pub fn parse_arguments<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;
    Ok(Config::from(cli))
}

impl Config {
    pub fn to_probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            log_mode: self.log_mode,
            log_path: self.log_path.clone(),
            verbosity: self.verbosity,
        }
    }
}
