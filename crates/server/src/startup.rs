use std::{env, future::Future, net::SocketAddr, path::PathBuf};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use dotenvy::dotenv;
use service::{address::AddressService, storage::JsonFileStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Bind address and data file, from config.toml or env vars with fallbacks.
pub struct Settings {
    pub addr: SocketAddr,
    pub data_file: PathBuf,
}

fn load_settings() -> anyhow::Result<Settings> {
    let (host, port, data_file) = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => (cfg.server.host, cfg.server.port, cfg.storage.data_file),
        Err(e) => {
            warn!(error = %e, "config unavailable; falling back to environment");
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port, PathBuf::from(configs::DEFAULT_DATA_FILE))
        }
    };
    let addr = format!("{}:{}", host, port).parse()?;
    Ok(Settings { addr, data_file })
}

/// Build the router over a file-backed collection, seeding the file if missing.
pub async fn build_app(data_file: PathBuf) -> anyhow::Result<Router> {
    common::env::ensure_env(&data_file).await?;
    let store = JsonFileStore::new(data_file).await?;
    info!(path = %store.path().display(), "address collection ready");
    let state = AppState::new(AddressService::new(store));
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app and serve until `shutdown` resolves.
///
/// In-flight requests, including a write holding the collection lock, are
/// drained before this returns.
pub async fn run<F>(shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();
    init_logging_from_env();

    let settings = load_settings()?;
    let app = build_app(settings.data_file).await?;

    info!(addr = %settings.addr, "starting address book server");
    let listener = TcpListener::bind(settings.addr).await?;
    serve(listener, app, shutdown).await
}

/// Serve `app` on `listener` until `shutdown` resolves and in-flight requests finish.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("address book server drained");
    Ok(())
}
