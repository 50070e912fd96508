//! File sending module
//!
//! Streams a file to the client with its length and inferred content type.

use crate::error::FsError;
use crate::http::{self, mime, ResponseBody};
use futures_util::TryStreamExt;
use http_body_util::{BodyExt, StreamBody};
use hyper::body::Frame;
use hyper::Response;
use std::path::Path;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// Read buffer size used while copying a file into the response
pub const COPY_BUFFER_SIZE: usize = 4096;

/// Open `path` and build a streaming response for it
///
/// The open file moves into the body stream and is closed when the stream
/// finishes, fails, or is dropped because the client went away.
pub async fn serve_file(path: &Path) -> Result<Response<ResponseBody>, FsError> {
    let file = File::open(path)
        .await
        .map_err(|e| FsError::from_io(path, e))?;
    let size = file
        .metadata()
        .await
        .map_err(|e| FsError::from_io(path, e))?
        .len();

    let stream = ReaderStream::with_capacity(file, COPY_BUFFER_SIZE).map_ok(Frame::data);
    let body = StreamBody::new(stream).boxed();

    Ok(http::build_file_response(
        body,
        mime::content_type_for(path),
        size,
    ))
}
