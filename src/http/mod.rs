//! HTTP protocol layer module
//!
//! Content-type inference, text encoding and response builders, kept apart
//! from the dispatch logic that decides which response to send.

pub mod encode;
pub mod mime;
mod mime_table;
pub mod response;

// Re-export commonly used types
pub use response::{
    build_error_response, build_file_response, build_html_response, build_status_response,
    ResponseBody,
};
