//! Path resolution
//!
//! Maps a request's URL path onto the base directory, one segment at a time.

use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Request paths that never map to a file; all are answered with 404
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("path is not valid UTF-8 after percent-decoding")]
    InvalidEncoding,

    #[error("parent directory segment in path")]
    ParentSegment,

    #[error("segment contains a NUL byte or backslash: {0:?}")]
    InvalidSegment(String),
}

/// Resolve a raw (percent-encoded) URL path against `base`
///
/// Empty and `.` segments are skipped, so `/`, `//` and `/./` all resolve to
/// `base` itself.
pub fn resolve_path(base: &Path, request_path: &str) -> Result<PathBuf, ResolveError> {
    let decoded = percent_decode_str(request_path)
        .decode_utf8()
        .map_err(|_| ResolveError::InvalidEncoding)?;

    let mut resolved = base.to_path_buf();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => return Err(ResolveError::ParentSegment),
            seg if seg.contains('\0') || seg.contains('\\') => {
                return Err(ResolveError::InvalidSegment(seg.to_string()));
            }
            seg => resolved.push(seg),
        }
    }
    Ok(resolved)
}
