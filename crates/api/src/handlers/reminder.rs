//! Handler for sending a payment reminder for one debt.

use axum::extract::{Path, State};
use axum::Json;
use dunning_events::ReminderReceipt;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/send-reminder/{debt_id}
///
/// 404 if the debt does not exist, 400 if its client cannot be reached.
pub async fn send(
    State(state): State<AppState>,
    Path(debt_id): Path<String>,
) -> AppResult<Json<ReminderReceipt>> {
    let receipt = state.reminders.send(&state.store, &debt_id).await?;
    Ok(Json(receipt))
}
