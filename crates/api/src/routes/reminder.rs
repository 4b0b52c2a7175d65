use axum::routing::post;
use axum::Router;

use crate::handlers::reminder;
use crate::state::AppState;

/// `POST /send-reminder/{debt_id}`
pub fn router() -> Router<AppState> {
    Router::new().route("/send-reminder/{debt_id}", post(reminder::send))
}
