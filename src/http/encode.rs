//! Text encoding helpers for directory listings
//!
//! HTML escaping for display text and attributes, and percent-encoding for
//! URL path segments.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left as-is inside a single path segment: RFC 3986 unreserved
/// characters plus `$ & + : = @`. `/ ; , ?` are encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Percent-encode a string for use as one URL path segment
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Escape `& < > " '` for HTML text and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Join an already-encoded segment onto a URL path
///
/// Empty segments in `base` are collapsed and the result always starts with
/// `/`, so `("/", "a")` gives `/a` and `("/sub/", "b")` gives `/sub/b`.
pub fn join_url_path(base: &str, encoded_segment: &str) -> String {
    let mut joined = String::with_capacity(base.len() + encoded_segment.len() + 1);
    for part in base.split('/').filter(|p| !p.is_empty()) {
        joined.push('/');
        joined.push_str(part);
    }
    joined.push('/');
    joined.push_str(encoded_segment);
    joined
}
