use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::sync::Notify;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod metadata;
mod render;
mod server;

use error::StartupError;

fn main() -> Result<(), StartupError> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg).map_err(StartupError::Logger)?;

    // Worker threads default to the number of CPU cores
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build().map_err(StartupError::Runtime)?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), StartupError> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let body_file = cfg.site.body_file.clone();
    let state = config::AppState::load(cfg).await.map_err(|source| StartupError::BodyFile {
        path: body_file.unwrap_or_default(),
        source,
    })?;
    let state = Arc::new(state);

    logger::log_server_start(&addr, &state.config);

    let shutdown = Arc::new(Notify::new());
    if let Err(e) = server::signal::start_signal_handler(Arc::clone(&shutdown)) {
        logger::log_warning(&format!("Signal handlers unavailable: {e}"));
    }

    // Connections are served with spawn_local
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(
            listener,
            state,
            Arc::new(AtomicUsize::new(0)),
            shutdown,
        ))
        .await;

    Ok(())
}
