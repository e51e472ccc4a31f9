use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::address::AddressService;

pub mod addresses;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub addresses: Arc<AddressService>,
}

impl AppState {
    pub fn new(addresses: AddressService) -> Self {
        Self { addresses: Arc::new(addresses) }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health probe plus the addresses resource.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let address_routes = Router::new()
        .route("/addresses", get(addresses::list).post(addresses::create))
        .route(
            "/addresses/:id",
            get(addresses::get).put(addresses::update).delete(addresses::delete),
        );

    // Liveness probe; lives outside the addresses resource
    Router::new()
        .route("/health", get(health))
        .merge(address_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
