//! Route definitions for the `/debts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::debt;
use crate::state::AppState;

/// Routes mounted at `/debts`.
///
/// ```text
/// GET    /          -> list (?status=Pendiente|Atrasada|Pagada)
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(debt::list).post(debt::create))
        .route(
            "/{id}",
            get(debt::get_by_id).put(debt::update).delete(debt::delete),
        )
}
