use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::address::Address;
use tracing::debug;

use crate::{errors::ApiError, routes::AppState};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Address>>, ApiError> {
    let addresses = state.addresses.list().await?;
    debug!(count = addresses.len(), "list addresses");
    Ok(Json(addresses))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Address>, ApiError> {
    match state.addresses.get(&id).await? {
        Some(address) => Ok(Json(address)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(fields): Json<Address>,
) -> Result<Json<Address>, ApiError> {
    let created = state.addresses.create(fields).await?;
    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<Address>,
) -> Result<Json<Address>, ApiError> {
    let updated = state.addresses.update(&id, fields).await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.addresses.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
