use crate::library::codec::CodecSettings;
use crate::library::log::LogMode;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub log_mode: LogMode,
    /// Only read when `log_mode` writes a file.
    pub log_path: Option<PathBuf>,
    pub verbosity: LevelFilter,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        ProbeSettings {
            log_mode: LogMode::None,
            log_path: None,
            verbosity: LevelFilter::Debug,
        }
    }
}

impl ProbeSettings {
    pub fn codec_settings(&self) -> CodecSettings {
        CodecSettings {
            verbosity: self.verbosity,
        }
    }
}
