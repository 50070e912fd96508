use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::Notify;

use dirserve::cli::Cli;
use dirserve::config::{AppState, Config};
use dirserve::error::ServerError;
use dirserve::{logger, server};

fn main() -> ExitCode {
    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&format!("Failed to start: {e}"));
            ExitCode::FAILURE
        }
    }
}

fn start() -> Result<(), ServerError> {
    let cli = Cli::parse();
    let cfg = Config::load(&cli)?;
    let state = AppState::new(cfg)?;

    logger::init(&state.config)?;

    // Tokio runtime sized by the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    // Zero means "use the CPU count" just like unset
    if let Some(workers) = state.config.server.workers.filter(|&n| n > 0) {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(state))
}

async fn async_main(state: AppState) -> Result<(), ServerError> {
    let listener = server::create_listener(state.addr)?;
    let state = Arc::new(state);
    logger::log_server_start(&state);

    let shutdown = Arc::new(Notify::new());
    server::signal::start_signal_handler(Arc::clone(&shutdown));

    server::run(listener, state, shutdown).await;
    Ok(())
}
