//! Handlers for the `/debts` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use dunning_core::error::CoreError;
use dunning_store::models::debt::{CreateDebt, Debt, UpdateDebt};
use dunning_store::repositories::DebtRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::query::DebtListParams;
use crate::state::AppState;

/// POST /api/v1/debts
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateDebt>,
) -> AppResult<(StatusCode, Json<Debt>)> {
    let debt = DebtRepo::create(&state.store, &input).await?;
    Ok((StatusCode::CREATED, Json(debt)))
}

/// GET /api/v1/debts?status=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<DebtListParams>,
) -> AppResult<Json<Vec<Debt>>> {
    let debts = DebtRepo::list(&state.store, params.status).await;
    Ok(Json(debts))
}

/// GET /api/v1/debts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Debt>> {
    let debt = DebtRepo::find_by_id(&state.store, &id)
        .await
        .ok_or(AppError::Core(CoreError::not_found("Debt", id)))?;
    Ok(Json(debt))
}

/// PUT /api/v1/debts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<UpdateDebt>,
) -> AppResult<Json<Debt>> {
    let debt = DebtRepo::update(&state.store, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Debt", id)))?;
    Ok(Json(debt))
}

/// DELETE /api/v1/debts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    if DebtRepo::delete(&state.store, &id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Debt", id)))
    }
}
