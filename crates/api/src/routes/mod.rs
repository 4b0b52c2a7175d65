pub mod client;
pub mod debt;
pub mod health;
pub mod reminder;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /debts                           list (?status=), create
/// /debts/{id}                      get, update, delete
///
/// /clients                         list, create
/// /clients/{id}                    get, update, delete
///
/// /send-reminder/{debt_id}         send reminder (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/debts", debt::router())
        .nest("/clients", client::router())
        .merge(reminder::router())
}
