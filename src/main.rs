use std::sync::Arc;
use std::time::Duration;

use elements_docs::DocsMiddleware;

mod config;
mod logger;
mod server;

use config::{Config, DocsConfig, SpecSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let cfg = Config::load_from(&config_path)?;
    logger::init(&cfg.logging)?;

    // Worker count from configuration, CPU cores otherwise
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let docs = Arc::new(build_docs(&cfg.docs)?);

    let listener = server::create_listener(addr)?;
    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals))?;
    server::spawn_reload_task(Arc::clone(&docs), Arc::clone(&signals));

    logger::log_server_start(&addr, &cfg);

    let settings = server::ConnectionSettings {
        keep_alive: cfg.server.keep_alive,
        timeout: Duration::from_secs(cfg.server.connection_timeout),
        access_log: cfg.logging.access_log,
    };
    server::run(listener, docs, settings, signals).await;
    Ok(())
}

/// Build the middleware from configuration, loading the specification now
fn build_docs(cfg: &DocsConfig) -> Result<DocsMiddleware, Box<dyn std::error::Error>> {
    let mut docs = DocsMiddleware::new(cfg.url_prefix.clone());
    match cfg.spec_source()? {
        SpecSource::None => {
            logger::log_warning("No specification configured, serving the viewer only");
        }
        SpecSource::File(path) => {
            docs.use_spec_file(path)?;
        }
        SpecSource::Dir(root, policy) => {
            docs.use_spec_dir(root, policy)?;
        }
    }
    Ok(docs)
}
