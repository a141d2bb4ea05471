//! Error types for reading splat files.

use std::io;
use std::path::PathBuf;

use splat_decode::DecodeError;
use thiserror::Error;

/// Errors that can occur while reading splat data.
#[derive(Debug, Error)]
pub enum Error {
    /// The splat file does not exist.
    #[error("splat file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Opening or reading a splat file failed.
    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from a stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The data ended with a partial record.
    #[error("malformed splat data: trailing {len}-byte fragment at offset {offset}")]
    Malformed { offset: u64, len: usize },

    /// A splat file ended with a partial record.
    #[error(
        "malformed splat file {}: trailing {len}-byte fragment at offset {offset}",
        .path.display()
    )]
    MalformedFile {
        path: PathBuf,
        offset: u64,
        len: usize,
    },

    /// A buffer could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Indexed access past the last record.
    #[error("splat index {index} out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Attach a file path to errors raised while reading that file.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io(source) => Self::from_io(path, source),
            Self::Malformed { offset, len } => Self::MalformedFile {
                path: path.into(),
                offset,
                len,
            },
            other => other,
        }
    }

    /// Map an I/O error on `path`, singling out missing files.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::File { path, source }
        }
    }
}

/// Result type for splat reading operations.
pub type Result<T> = std::result::Result<T, Error>;
