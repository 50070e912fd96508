//! Directory listing module
//!
//! Enumerates a directory and renders it as an HTML index page.

use crate::error::FsError;
use crate::http::encode::{encode_path_segment, escape_html, join_url_path};
use crate::http::{self, ResponseBody};
use hyper::Response;
use std::fmt::Write;
use std::path::Path;
use tokio::fs;

const PREAMBLE: &str = concat!(
    r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#,
    "\n<html>\n<head>",
    "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n</head>\n",
    "<body>\n<hr>\n<ul>\n",
);

const TAIL: &str = "</ul>\n<hr>\n</body>\n</html>\n";

/// One child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    /// Name as shown in the index, with `/` marking directories
    pub fn display_name(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Read the immediate children of `dir`, sorted by name
///
/// Symlinks are reported as directories when their target is one. Entries whose
/// type cannot be determined are listed as plain files.
pub async fn read_entries(dir: &Path) -> Result<Vec<DirEntry>, FsError> {
    let mut read_dir = fs::read_dir(dir)
        .await
        .map_err(|e| FsError::from_io(dir, e))?;

    let mut entries = Vec::new();
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .map_err(|e| FsError::from_io(dir, e))?
    {
        let is_dir = match entry.file_type().await {
            Ok(ft) if ft.is_symlink() => fs::metadata(entry.path())
                .await
                .is_ok_and(|m| m.is_dir()),
            Ok(ft) => ft.is_dir(),
            Err(_) => false,
        };
        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Render the index page for `url_path` (the raw request path)
pub fn render_listing(url_path: &str, entries: &[DirEntry]) -> String {
    let mut page = String::with_capacity(PREAMBLE.len() + TAIL.len() + entries.len() * 64);
    page.push_str(PREAMBLE);

    for entry in entries {
        let name = entry.display_name();
        let link = join_url_path(url_path, &encode_path_segment(&name));
        let _ = writeln!(
            page,
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&link),
            escape_html(&name)
        );
    }

    page.push_str(TAIL);
    page
}

/// List `dir` and build the HTML response
pub async fn serve_listing(dir: &Path, url_path: &str) -> Result<Response<ResponseBody>, FsError> {
    let entries = read_entries(dir).await?;
    Ok(http::build_html_response(render_listing(url_path, &entries)))
}
