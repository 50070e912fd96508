//! HTTP response building module
//!
//! Builders for the handful of responses the server produces. All of them share
//! one boxed body type so streamed files and buffered pages go through the same
//! service signature.

use crate::error::FsError;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::body::Bytes;
use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE};
use hyper::{Response, StatusCode};
use std::io;

/// Body type of every response; errors are mid-stream file read failures
pub type ResponseBody = BoxBody<Bytes, io::Error>;

/// Content-Type of directory listings
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Wrap buffered bytes as a response body
pub fn full(data: impl Into<Bytes>) -> ResponseBody {
    Full::new(data.into()).map_err(|never| match never {}).boxed()
}

/// Empty response body
pub fn empty() -> ResponseBody {
    Empty::<Bytes>::new().map_err(|never| match never {}).boxed()
}

/// Build a response with the given status and an empty body
pub fn build_status_response(status: StatusCode) -> Response<ResponseBody> {
    Response::builder()
        .status(status)
        .body(empty())
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            bare_response(status)
        })
}

/// Build the empty-body response for a classified filesystem failure
pub fn build_error_response(error: &FsError) -> Response<ResponseBody> {
    build_status_response(error.status())
}

/// Build 200 HTML response with a known length
pub fn build_html_response(content: String) -> Response<ResponseBody> {
    let content_length = content.len();

    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, HTML_CONTENT_TYPE)
        .header(CONTENT_LENGTH, content_length)
        .body(full(content))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            bare_response(StatusCode::INTERNAL_SERVER_ERROR)
        })
}

/// Build 200 response around a streamed file body
pub fn build_file_response(
    body: ResponseBody,
    content_type: &str,
    content_length: u64,
) -> Response<ResponseBody> {
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, content_length)
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            bare_response(StatusCode::INTERNAL_SERVER_ERROR)
        })
}

fn bare_response(status: StatusCode) -> Response<ResponseBody> {
    let mut response = Response::new(empty());
    *response.status_mut() = status;
    response
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
