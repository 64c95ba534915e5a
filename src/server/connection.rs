// Connection handling module
// Serves a single TCP connection through the documentation service

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use elements_docs::DocsService;
use hyper::body::{Body, Incoming};
use hyper::server::conn::http1;
use hyper::service::{service_fn, Service};
use hyper::Request;
use hyper_util::rt::TokioIo;

use super::fallback::NotFound;
use crate::logger;

/// Per-connection behavior taken from configuration
#[derive(Debug, Clone, Copy)]
pub struct ConnectionSettings {
    pub keep_alive: bool,
    pub timeout: Duration,
    pub access_log: bool,
}

/// Handle a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Configures HTTP/1.1 keep-alive
/// 3. Serves the connection through the documentation middleware
/// 4. Applies the connection timeout
/// 5. Decrements the connection counter when done
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    service: DocsService<NotFound>,
    settings: ConnectionSettings,
    conn_counter: Arc<AtomicUsize>,
) {
    conn_counter.fetch_add(1, Ordering::SeqCst);
    logger::log_connection_accepted(&peer_addr);

    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(settings.keep_alive);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req: Request<Incoming>| {
                let service = service.clone();
                async move {
                    if settings.access_log {
                        logger::log_request(req.method(), req.uri(), req.version());
                    }
                    let response = service.call(req).await?;
                    if settings.access_log {
                        let size = response.body().size_hint().exact().unwrap_or(0);
                        logger::log_response(response.status(), size);
                    }
                    Ok::<_, Infallible>(response)
                }
            }),
        );

        match tokio::time::timeout(settings.timeout, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    settings.timeout.as_secs()
                ));
            }
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}
