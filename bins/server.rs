use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

const SERVICE: &str = "address_book";

/// Resolves on Ctrl+C; a failure to install the handler is logged and the
/// server keeps running until killed.
async fn shutdown_signal(service_id: Uuid) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(service = SERVICE, event = "shutdown_signal", %service_id, "draining in-flight requests"),
        Err(e) => {
            warn!(service = SERVICE, event = "signal_unavailable", error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}

fn worker_threads() -> Option<usize> {
    configs::AppConfig::load_and_validate()
        .ok()
        .and_then(|cfg| cfg.server.worker_threads)
        .or_else(|| std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse().ok()))
        .filter(|w| *w > 0)
}

fn main() -> ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let service_id = Uuid::new_v4();
    std::panic::set_hook(Box::new(move |info| {
        error!(service = SERVICE, event = "panic", %service_id, message = %info, "unhandled panic");
    }));

    let threads = worker_threads();
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(n) = threads {
        builder.worker_threads(n);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        %service_id,
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        threads = threads.unwrap_or_default(),
        "address book service starting"
    );

    match rt.block_on(server::run(shutdown_signal(service_id))) {
        Ok(()) => {
            info!(service = SERVICE, event = "stop", %service_id, "address book service stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = SERVICE, event = "run_failed", %service_id, error = %e, "address book service failed");
            ExitCode::FAILURE
        }
    }
}
