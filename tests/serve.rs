use dirserve::config::{AppState, Config};
use dirserve::server;
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::header::{HeaderName, CONTENT_LENGTH, CONTENT_TYPE, HOST};
use hyper::{Method, Request, StatusCode};
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpStream;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

struct TestServer {
    addr: SocketAddr,
    shutdown: Arc<Notify>,
    handle: JoinHandle<()>,
    _root: TempDir,
}

async fn start_server() -> TestServer {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("a.txt"), "hi").unwrap();
    std::fs::write(root.path().join("page.html"), "<h1>x</h1>").unwrap();
    std::fs::create_dir(root.path().join("sub")).unwrap();
    std::fs::create_dir(root.path().join("docs")).unwrap();
    std::fs::write(root.path().join("docs").join("read me.txt"), "doc").unwrap();

    let mut config = Config::default();
    config.server.bind = "127.0.0.1".to_string();
    config.server.port = 0;
    config.server.directory = root.path().to_string_lossy().into_owned();
    config.logging.access_log = false;
    let state = AppState::new(config).unwrap();

    let listener = server::create_listener(state.addr).unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Arc::new(Notify::new());
    let handle = tokio::spawn(server::run(listener, Arc::new(state), Arc::clone(&shutdown)));

    TestServer {
        addr,
        shutdown,
        handle,
        _root: root,
    }
}

struct Reply {
    status: StatusCode,
    content_type: Option<String>,
    content_length: Option<String>,
    body: Bytes,
}

async fn request(addr: SocketAddr, method: Method, path: &str) -> Reply {
    let stream = TcpStream::connect(addr).await.unwrap();
    let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
        .await
        .unwrap();
    tokio::spawn(async move {
        let _ = conn.await;
    });

    let req = Request::builder()
        .method(method)
        .uri(path)
        .header(HOST, addr.to_string())
        .body(Empty::<Bytes>::new())
        .unwrap();
    let response = sender.send_request(req).await.unwrap();

    let header = |name: HeaderName| {
        response
            .headers()
            .get(name)
            .map(|v| v.to_str().unwrap().to_string())
    };
    let status = response.status();
    let content_type = header(CONTENT_TYPE);
    let content_length = header(CONTENT_LENGTH);
    let body = response.into_body().collect().await.unwrap().to_bytes();

    Reply {
        status,
        content_type,
        content_length,
        body,
    }
}

#[tokio::test]
async fn serves_files_listings_and_errors() {
    let server = start_server().await;

    let reply = request(server.addr, Method::GET, "/a.txt").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.content_length.as_deref(), Some("2"));
    assert_eq!(reply.content_type.as_deref(), Some("text/plain"));
    assert_eq!(&reply.body[..], b"hi");

    let reply = request(server.addr, Method::GET, "/page.html").await;
    assert_eq!(reply.content_type.as_deref(), Some("text/html"));

    let reply = request(server.addr, Method::GET, "/sub/").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(
        reply.content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );
    let page = String::from_utf8(reply.body.to_vec()).unwrap();
    assert!(page.ends_with("</html>\n"));
    assert!(!page.contains("<li>"));

    let reply = request(server.addr, Method::GET, "/missing").await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert!(reply.body.is_empty());

    server.shutdown.notify_one();
    tokio::time::timeout(Duration::from_secs(10), server.handle)
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn listing_links_round_trip() {
    let server = start_server().await;

    let reply = request(server.addr, Method::GET, "/docs").await;
    let page = String::from_utf8(reply.body.to_vec()).unwrap();
    assert!(page.contains("<li><a href=\"/docs/read%20me.txt\">read me.txt</a></li>"));

    let reply = request(server.addr, Method::GET, "/docs/read%20me.txt").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(&reply.body[..], b"doc");

    let root = request(server.addr, Method::GET, "/").await;
    let page = String::from_utf8(root.body.to_vec()).unwrap();
    assert!(page.contains("href=\"/docs%2F\""));
    let reply = request(server.addr, Method::GET, "/docs%2F").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&reply.body).contains("read me.txt"));

    server.shutdown.notify_one();
}

#[tokio::test]
async fn head_keeps_length_without_body() {
    let server = start_server().await;

    let reply = request(server.addr, Method::HEAD, "/a.txt").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.content_length.as_deref(), Some("2"));
    assert!(reply.body.is_empty());

    server.shutdown.notify_one();
}

#[tokio::test]
async fn repeated_gets_are_identical() {
    let server = start_server().await;

    let first = request(server.addr, Method::GET, "/a.txt").await;
    let second = request(server.addr, Method::GET, "/a.txt").await;
    assert_eq!(first.status, second.status);
    assert_eq!(first.content_type, second.content_type);
    assert_eq!(first.content_length, second.content_length);
    assert_eq!(first.body, second.body);

    server.shutdown.notify_one();
}

#[tokio::test]
async fn shutdown_closes_idle_keep_alive_connections() {
    let server = start_server().await;

    // One request, then leave the connection open and idle
    let stream = TcpStream::connect(server.addr).await.unwrap();
    let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
        .await
        .unwrap();
    let client_conn = tokio::spawn(conn);

    let req = Request::builder()
        .uri("/a.txt")
        .header(HOST, server.addr.to_string())
        .body(Empty::<Bytes>::new())
        .unwrap();
    let response = sender.send_request(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response.into_body().collect().await.unwrap();

    let started = tokio::time::Instant::now();
    server.shutdown.notify_one();
    tokio::time::timeout(Duration::from_secs(10), server.handle)
        .await
        .unwrap()
        .unwrap();

    // Well under the 5 second grace period
    let elapsed = started.elapsed();
    assert!(elapsed < Duration::from_secs(2), "shutdown took {elapsed:?}");

    // The server closed its side cleanly
    let closed = tokio::time::timeout(Duration::from_secs(5), client_conn)
        .await
        .unwrap()
        .unwrap();
    assert!(closed.is_ok());
    drop(sender);
}
