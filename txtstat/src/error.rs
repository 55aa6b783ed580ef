// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between choosing a file and rendering its
/// statistics. None of these end the session.
#[derive(Debug, Error)]
pub enum StatError {
    #[error("file '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("'{}' is not a regular file", .0.display())]
    NotARegularFile(PathBuf),

    #[error("cannot read '{}' as UTF-8 text: {}", .path.display(), .source)]
    UnreadableOrUndecodable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid selection '{0}'")]
    InvalidMenuSelection(String),

    #[error("no file selected")]
    NoTarget,
}

impl StatError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::UnreadableOrUndecodable {
            path: path.into(),
            source,
        }
    }
}
