//! MIME type detection module
//!
//! Returns the Content-Type for a file path based on its extension.

use super::mime_table::CONTENT_TYPES;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Fallback for unknown or missing extensions
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, &'static str> {
    TABLE.get_or_init(|| CONTENT_TYPES.iter().copied().collect())
}

/// Extension of the final path segment, from its last `.` inclusive
///
/// Dotfiles count as all extension (`.bashrc` -> `.bashrc`), matching how the
/// table keys are written. Returns an empty string when there is no dot.
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    name.rfind('.')
        .map_or_else(String::new, |idx| name[idx..].to_ascii_lowercase())
}

/// Look up a dotted, already-lowercased extension such as `.png`
pub fn lookup_extension(extension: &str) -> Option<&'static str> {
    table().get(extension).copied()
}

/// Get MIME Content-Type for a file path
///
/// # Examples
/// ```
/// use std::path::Path;
/// use dirserve::http::mime::content_type_for;
/// assert_eq!(content_type_for(Path::new("index.HTML")), "text/html");
/// assert_eq!(content_type_for(Path::new("README")), "application/octet-stream");
/// ```
pub fn content_type_for(path: &Path) -> &'static str {
    lookup_extension(&extension_of(path)).unwrap_or(DEFAULT_CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type_for(Path::new("a.html")), "text/html");
        assert_eq!(content_type_for(Path::new("a.htm")), "text/html");
        assert_eq!(content_type_for(Path::new("img/logo.png")), "image/png");
        assert_eq!(content_type_for(Path::new("data.json")), "application/json");
        assert_eq!(content_type_for(Path::new("style.css")), "text/css");
        assert_eq!(content_type_for(Path::new("notes.txt")), "text/plain");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(
            content_type_for(Path::new("file.unknownext")),
            DEFAULT_CONTENT_TYPE
        );
        assert_eq!(content_type_for(Path::new("Makefile")), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for(Path::new("")), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(content_type_for(Path::new("PHOTO.PNG")), "image/png");
        assert_eq!(extension_of(Path::new("Archive.TAR.GZ")), ".gz");
    }

    #[test]
    fn test_extension_uses_final_segment_only() {
        assert_eq!(extension_of(Path::new("dir.d/file")), "");
        assert_eq!(extension_of(Path::new("dir.d/file.js")), ".js");
        assert_eq!(extension_of(Path::new(".bashrc")), ".bashrc");
        assert_eq!(extension_of(Path::new("trailing.")), ".");
    }

    #[test]
    fn test_table_keys_are_normalized() {
        for (ext, mime) in CONTENT_TYPES {
            assert!(ext.starts_with('.'), "key without dot: {ext}");
            assert_eq!(*ext, ext.to_ascii_lowercase());
            assert!(!mime.is_empty());
        }
        assert_eq!(table().len(), CONTENT_TYPES.len());
    }
}
