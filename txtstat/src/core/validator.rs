// src/core/validator.rs
use log::warn;
use std::fs::{self, File};
use std::io::{self, Read as _};
use std::path::Path;

use crate::error::StatError;

/// Checks that `path` exists, is a regular file and holds UTF-8 text.
///
/// # Errors
///
/// * [`StatError::FileNotFound`] if nothing exists at `path`
/// * [`StatError::NotARegularFile`] for directories, sockets and the like
/// * [`StatError::UnreadableOrUndecodable`] if the file cannot be opened or
///   is not valid UTF-8
pub fn validate_file(path: &Path) -> Result<(), StatError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(StatError::FileNotFound(path.to_path_buf()));
        }
        Err(err) => return Err(StatError::unreadable(path, err)),
    };

    if !metadata.is_file() {
        return Err(StatError::NotARegularFile(path.to_path_buf()));
    }

    let mut content = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut content))
        .map_err(|err| StatError::unreadable(path, err))?;

    Ok(())
}

/// Boolean form of [`validate_file`] for callers that only need to know
/// whether to prompt again.
#[inline]
#[must_use]
pub fn is_usable(path: &Path) -> bool {
    validate_file(path)
        .inspect_err(|err| warn!("Rejected {}: {err}", path.display()))
        .is_ok()
}
