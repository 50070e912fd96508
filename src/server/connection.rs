// Connection handling module
// Serves one accepted TCP connection on its own task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Spawn a task that serves HTTP/1 on `stream`.
///
/// `conn_counter` is incremented here and decremented when the connection
/// closes, so the shutdown path can wait for it to reach zero. When
/// `shutdown` flips, the connection finishes its in-flight response and
/// closes instead of waiting for the next keep-alive request.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
    mut shutdown: watch::Receiver<bool>,
) {
    conn_counter.fetch_add(1, Ordering::SeqCst);
    logger::log_debug(&format!("[Connection] Accepted from: {peer_addr}"));

    let state = Arc::clone(state);
    let conn_counter = Arc::clone(conn_counter);

    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(state.config.server.keep_alive);

        let service = service_fn(move |req| {
            handler::handle_request(req, Arc::clone(&state), peer_addr)
        });

        let conn = builder.serve_connection(io, service);
        tokio::pin!(conn);

        let result = tokio::select! {
            result = conn.as_mut() => result,
            // A dropped sender also means the server is going away
            _ = shutdown.changed() => {
                conn.as_mut().graceful_shutdown();
                conn.as_mut().await
            }
        };

        // Also reached when a file body fails mid-stream or the client leaves
        if let Err(err) = result {
            logger::log_connection_error(&err);
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}
