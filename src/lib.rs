
// CODEC AND LOGGING //

pub mod library {
    pub mod codec;
    pub mod log;
}
pub use library::codec::{Codec, CodecSettings, Dimensions, ImageCodec, ImageHandle};
pub use library::log::{LogError, LogMode, init_logging};

// FILE CHECKS AND SETTINGS //

pub mod shared {
    pub mod filecheck;
    pub mod settings;
}
pub use shared::filecheck::{checkfile, file_exists};
pub use shared::settings::ProbeSettings;

// PROBING //

pub mod probe;
pub use probe::{EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE, ProbeError, probe, run};
