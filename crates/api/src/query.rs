//! Query parameter types for API handlers.

use dunning_store::models::status::DebtStatus;
use serde::Deserialize;

/// `GET /debts?status=Pendiente`. An unknown label is rejected with 400.
#[derive(Debug, Default, Deserialize)]
pub struct DebtListParams {
    pub status: Option<DebtStatus>,
}
