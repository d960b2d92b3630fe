use crate::ProbeError;
use std::fs::File;
use std::path::Path;

/// Lightweight open-for-read probe. The content is not inspected.
pub fn file_exists(path: &Path) -> bool {
    File::open(path).is_ok()
}

/// Checks that `path` refers to an existing, readable file.
///
/// Returns Ok(()) if the file can be opened for reading.
/// Otherwise returns `ProbeError::PathNotFound`.
pub fn checkfile(path: &Path) -> Result<(), ProbeError> {
    if file_exists(path) {
        Ok(())
    } else {
        Err(ProbeError::PathNotFound(path.display().to_string()))
    }
}
