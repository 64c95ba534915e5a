// Signal handling module (nginx-style)
//
// Supported signals:
// - SIGHUP:  Reload the specification
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Signal handler state
pub struct SignalHandler {
    /// Shutdown signal (SIGTERM, SIGINT)
    pub shutdown: Notify,
    /// Reload signal (SIGHUP)
    pub reload: Notify,
    /// Whether shutdown has been requested
    pub shutdown_requested: AtomicBool,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Notify::new(),
            reload: Notify::new(),
            shutdown_requested: AtomicBool::new(false),
        }
    }

    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        self.shutdown.notify_one();
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start signal handlers (Unix only)
///
/// | Signal  | Action               | Nginx Equivalent  |
/// |---------|----------------------|-------------------|
/// | SIGHUP  | Reload specification | `nginx -s reload` |
/// | SIGTERM | Graceful stop        | `nginx -s stop`   |
/// | SIGINT  | Graceful stop        | Ctrl+C            |
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sighup = signal(SignalKind::hangup())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tracing::info!(
        pid = std::process::id(),
        "[SIGNAL] Handlers registered: SIGHUP reloads the specification, SIGTERM/SIGINT stop"
    );

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = sighup.recv() => {
                    tracing::info!("[SIGNAL] SIGHUP received, reloading specification");
                    handler.reload.notify_one();
                }
                _ = sigterm.recv() => {
                    tracing::info!("[SIGNAL] SIGTERM received, initiating graceful shutdown");
                    handler.request_shutdown();
                    break;
                }
                _ = sigint.recv() => {
                    tracing::info!("[SIGNAL] SIGINT received, initiating graceful shutdown");
                    handler.request_shutdown();
                    break;
                }
            }
        }
    });
    Ok(())
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) -> std::io::Result<()> {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            tracing::info!("[SIGNAL] Ctrl+C received, initiating shutdown");
            handler.request_shutdown();
        }
    });
    Ok(())
}
