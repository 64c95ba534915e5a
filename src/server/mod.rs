// Server module entry point
// Accept loop, connection handling and signal handling

mod connection;
mod fallback;
mod listener;
pub mod signal;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use elements_docs::{DocsMiddleware, DocsService};
use tokio::net::TcpListener;

use crate::logger;

pub use connection::ConnectionSettings;
pub use listener::create_listener;
pub use signal::{start_signal_handler, SignalHandler};

const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Accept connections until shutdown is requested
///
/// Every connection is served by the documentation middleware in front of
/// the 404 fallback. On shutdown the listener is closed first, then open
/// connections get up to the connection timeout to finish before this
/// returns.
pub async fn run(
    listener: TcpListener,
    docs: Arc<DocsMiddleware>,
    settings: ConnectionSettings,
    signals: Arc<SignalHandler>,
) {
    let service = DocsService::new(docs, fallback::NotFound);
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::handle_connection(
                            stream,
                            peer_addr,
                            service.clone(),
                            settings,
                            Arc::clone(&active_connections),
                        );
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }
            () = signals.shutdown.notified() => {
                break;
            }
        }
    }

    drop(listener);
    logger::log_shutdown(active_connections.load(Ordering::SeqCst));
    let remaining = drain_connections(&active_connections, settings.timeout).await;
    if remaining > 0 {
        logger::log_warning(&format!(
            "Drain deadline reached, abandoning {remaining} connection(s)"
        ));
    }
}

/// Wait until no connection is active or `grace` has elapsed
///
/// Returns the number of connections still open.
async fn drain_connections(active_connections: &AtomicUsize, grace: Duration) -> usize {
    let deadline = tokio::time::Instant::now() + grace;
    loop {
        let remaining = active_connections.load(Ordering::SeqCst);
        if remaining == 0 || tokio::time::Instant::now() >= deadline {
            return remaining;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
}

/// Reload the specification whenever SIGHUP arrives
pub fn spawn_reload_task(docs: Arc<DocsMiddleware>, signals: Arc<SignalHandler>) {
    tokio::spawn(async move {
        loop {
            signals.reload.notified().await;
            if signals.is_shutdown_requested() {
                break;
            }
            match docs.reload_spec().await {
                Ok(()) => logger::log_spec_reloaded(),
                Err(e) => logger::log_error(&format!("Specification reload failed: {e}")),
            }
        }
    });
}
