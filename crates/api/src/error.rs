use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dunning_core::error::CoreError;
use dunning_events::{DeliveryError, ReminderError};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `dunning_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The reminder notifier failed to deliver.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// A request that could not be parsed (malformed JSON, bad query string).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ReminderError> for AppError {
    fn from(err: ReminderError) -> Self {
        match err {
            ReminderError::Core(core) => AppError::Core(core),
            ReminderError::Delivery(delivery) => AppError::Delivery(delivery),
        }
    }
}

impl From<JsonRejection> for AppError {
    /// Well-formed JSON that does not fit the DTO (missing field, malformed
    /// date, wrong type) is a validation failure; anything else is a bad
    /// request.
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                AppError::Core(CoreError::Validation(err.body_text()))
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    not_found_message(entity, id),
                ),
                CoreError::Validation(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    msg.clone(),
                ),
                CoreError::PreconditionFailed(msg) => {
                    (StatusCode::BAD_REQUEST, "PRECONDITION_FAILED", msg.clone())
                }
            },

            // --- Outbound delivery ---
            AppError::Delivery(err) => {
                tracing::warn!(error = %err, "Reminder delivery failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "DELIVERY_FAILED",
                    "No se pudo enviar el recordatorio".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// User-facing "not found" text for the entity kinds the API exposes.
fn not_found_message(entity: &str, id: &str) -> String {
    match entity {
        "Debt" => format!("Deuda no encontrada: {id}"),
        "Client" => format!("Cliente no encontrado: {id}"),
        other => format!("{other} no encontrado: {id}"),
    }
}
