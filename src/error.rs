//! Error types
//!
//! [`FsError`] classifies filesystem failures into the three outcomes a
//! request can have; [`ServerError`] covers startup.

use hyper::StatusCode;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filesystem failure during stat, open or directory listing
#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {path}: {source}")]
    NotFound { path: PathBuf, source: io::Error },

    #[error("permission denied: {path}: {source}")]
    PermissionDenied { path: PathBuf, source: io::Error },

    #[error("io error: {path}: {source}")]
    Other { path: PathBuf, source: io::Error },
}

impl FsError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Other { path, source },
        }
    }

    /// HTTP status answered for this failure
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::PermissionDenied { .. } => StatusCode::UNAUTHORIZED,
            Self::Other { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Startup failure; any of these ends the process
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid bind address '{address}': {source}")]
    InvalidAddress {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("base directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("base path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
