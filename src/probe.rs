use std::io::Write;
use std::path::Path;

use log::{debug, warn};

use crate::library::codec::{Codec, Dimensions};
use crate::shared::filecheck::checkfile;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

/// The two reportable probe failures. The `Display` text is the exact line
/// written to stderr.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProbeError {
    #[error("File {0} does not exist!")]
    PathNotFound(String),

    #[error("Error: could not load image {0}")]
    DecodeFailure(String),
}

impl ProbeError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ProbeError::PathNotFound(_) | ProbeError::DecodeFailure(_) => EXIT_FAILURE,
        }
    }
}

/// Decodes `path` and checks that it exists.
///
/// The decode runs before the existence check, and a failed existence check
/// wins over whatever the decode produced.
pub fn probe<C: Codec + ?Sized>(path: &Path, codec: &C) -> Result<Dimensions, ProbeError> {
    let image = codec.decode(path);

    if let Err(e) = checkfile(path) {
        debug!("existence check failed for {}", path.display());
        return Err(e);
    }

    match image.dimensions() {
        Some(dimensions) => Ok(dimensions),
        None => {
            debug!(
                "decode failed for {}: {}",
                path.display(),
                image.failure().unwrap_or("no pixel data")
            );
            Err(ProbeError::DecodeFailure(path.display().to_string()))
        }
    }
}

/// Runs one probe and writes its single result line.
///
/// Success goes to `out`, failures to `err`; the return value is the process
/// exit code.
pub fn run<C, O, E>(path: &Path, codec: &C, out: &mut O, err: &mut E) -> u8
where
    C: Codec + ?Sized,
    O: Write,
    E: Write,
{
    match probe(path, codec) {
        Ok(dimensions) => {
            if let Err(e) = writeln!(
                out,
                "Successfully load image {} of size {}",
                path.display(),
                dimensions
            ) {
                warn!("could not write result: {}", e);
            }
            EXIT_SUCCESS
        }
        Err(probe_error) => {
            if let Err(e) = writeln!(err, "{}", probe_error) {
                warn!("could not write error: {}", e);
            }
            probe_error.exit_code()
        }
    }
}
