//! Request dispatch module
//!
//! Entry point for HTTP request processing: resolves the path, stats it, and
//! hands off to the directory listing or file sender.

use crate::config::AppState;
use crate::error::FsError;
use crate::handler::resolve::resolve_path;
use crate::handler::{file, listing};
use crate::http::{self, ResponseBody};
use crate::logger::{self, AccessLogEntry};
use hyper::header::CONTENT_LENGTH;
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// Every method gets GET semantics. Failures end only this request, with an
/// empty body and the status of the classified error.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<ResponseBody>, Infallible> {
    logger::log_request(req.method(), req.uri());

    let mut entry = state
        .access_log()
        .then(|| AccessLogEntry::start(&req, peer_addr));

    let url_path = req.uri().path().to_owned();
    drop(req);

    let response = dispatch(&url_path, &state.base_dir).await;

    if let Some(entry) = entry.as_mut() {
        entry.finish(response.status().as_u16(), declared_length(&response));
        logger::log_access(entry, &state.access_log_format);
    }
    Ok(response)
}

/// Produce the response for a raw URL path under `base_dir`
pub async fn dispatch(url_path: &str, base_dir: &Path) -> Response<ResponseBody> {
    let path = match resolve_path(base_dir, url_path) {
        Ok(path) => path,
        Err(e) => {
            logger::log_warning(&format!("Rejected request path '{url_path}': {e}"));
            return http::build_status_response(StatusCode::NOT_FOUND);
        }
    };

    let result = match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_dir() => listing::serve_listing(&path, url_path).await,
        Ok(_) => file::serve_file(&path).await,
        Err(e) => Err(FsError::from_io(&path, e)),
    };

    result.unwrap_or_else(|e| {
        logger::log_error(&e.to_string());
        http::build_error_response(&e)
    })
}

fn declared_length(response: &Response<ResponseBody>) -> u64 {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use hyper::header::CONTENT_TYPE;
    use hyper::Method;
    use tempfile::TempDir;

    /// Base directory with `a.txt` ("hi") and an empty `sub/`
    fn fixture() -> TempDir {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a.txt"), "hi").unwrap();
        std::fs::create_dir(tmp.path().join("sub")).unwrap();
        tmp
    }

    fn state_for(dir: &Path) -> Arc<AppState> {
        let mut config = Config::default();
        config.server.directory = dir.to_string_lossy().into_owned();
        config.logging.access_log = false;
        Arc::new(AppState::new(config).unwrap())
    }

    async fn get(state: &Arc<AppState>, method: Method, uri: &str) -> (Response<()>, Vec<u8>) {
        let req = Request::builder().method(method).uri(uri).body(()).unwrap();
        let response = handle_request(req, Arc::clone(state), "127.0.0.1:1".parse().unwrap())
            .await
            .unwrap();
        let (parts, body) = response.into_parts();
        let bytes = body.collect().await.unwrap().to_bytes().to_vec();
        (Response::from_parts(parts, ()), bytes)
    }

    #[tokio::test]
    async fn test_file_request() {
        let tmp = fixture();
        let state = state_for(tmp.path());
        let (response, body) = get(&state, Method::GET, "/a.txt").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_LENGTH], "2");
        assert_eq!(body, b"hi");
    }

    #[tokio::test]
    async fn test_empty_subdirectory_listing() {
        let tmp = fixture();
        let state = state_for(tmp.path());
        let (response, body) = get(&state, Method::GET, "/sub/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/html; charset=utf-8");
        let page = String::from_utf8(body).unwrap();
        assert!(page.contains("<ul>\n</ul>"));
    }

    #[tokio::test]
    async fn test_root_listing_links() {
        let tmp = fixture();
        let state = state_for(tmp.path());
        let (_, body) = get(&state, Method::GET, "/").await;
        let page = String::from_utf8(body).unwrap();
        assert_eq!(page.matches("<li>").count(), 2);
        assert!(page.contains("<li><a href=\"/a.txt\">a.txt</a></li>"));
        assert!(page.contains("<li><a href=\"/sub%2F\">sub/</a></li>"));
    }

    #[tokio::test]
    async fn test_listing_link_resolves_back() {
        let tmp = fixture();
        let state = state_for(tmp.path());
        let (response, _) = get(&state, Method::GET, "/sub%2F").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_missing_path_is_404_with_empty_body() {
        let tmp = fixture();
        let state = state_for(tmp.path());
        let (response, body) = get(&state, Method::GET, "/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_file_used_as_directory_is_error() {
        let tmp = fixture();
        let state = state_for(tmp.path());
        let (response, body) = get(&state, Method::GET, "/a.txt/inner").await;
        // ENOTDIR is neither not-found nor permission
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_traversal_is_404() {
        let tmp = fixture();
        let inner = tmp.path().join("sub");
        let state = state_for(&inner);
        let (response, body) = get(&state, Method::GET, "/../a.txt").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_any_method_gets_get_semantics() {
        let tmp = fixture();
        let state = state_for(tmp.path());
        let (response, body) = get(&state, Method::POST, "/a.txt").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body, b"hi");
    }

    #[tokio::test]
    async fn test_repeated_requests_are_identical() {
        let tmp = fixture();
        let state = state_for(tmp.path());
        let (first, first_body) = get(&state, Method::GET, "/a.txt").await;
        let (second, second_body) = get(&state, Method::GET, "/a.txt").await;
        assert_eq!(first.status(), second.status());
        assert_eq!(first.headers(), second.headers());
        assert_eq!(first_body, second_body);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_permission_denied_is_401() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = fixture();
        let locked = tmp.path().join("locked.txt");
        std::fs::write(&locked, "secret").unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
        // Permission bits do not apply to root
        if std::fs::File::open(&locked).is_ok() {
            return;
        }

        let state = state_for(tmp.path());
        let (response, body) = get(&state, Method::GET, "/locked.txt").await;
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o644)).unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_unreadable_directory_is_401() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = fixture();
        let locked = tmp.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
        if std::fs::read_dir(&locked).is_ok() {
            return;
        }

        let state = state_for(tmp.path());
        let (response, body) = get(&state, Method::GET, "/locked/").await;
        // Restore first so TempDir can clean up even if an assert fails
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body.is_empty());
    }
}
