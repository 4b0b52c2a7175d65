//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use dunning_core::error::CoreError;
use dunning_store::models::client::{Client, CreateClient, UpdateClient};
use dunning_store::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::state::AppState;

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = ClientRepo::create(&state.store, &input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/v1/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.store).await;
    Ok(Json(clients))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.store, &id)
        .await
        .ok_or(AppError::Core(CoreError::not_found("Client", id)))?;
    Ok(Json(client))
}

/// PUT /api/v1/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<UpdateClient>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::update(&state.store, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Client", id)))?;
    Ok(Json(client))
}

/// DELETE /api/v1/clients/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    if ClientRepo::delete(&state.store, &id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Client", id)))
    }
}
