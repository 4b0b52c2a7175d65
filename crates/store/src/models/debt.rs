//! Debt entity model and DTOs.

use dunning_core::types::{Date, EntityId};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::status::DebtStatus;

/// An amount owed by a named client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: EntityId,
    /// Free text matched against `Client::name` when sending reminders.
    pub client_name: String,
    pub amount: f64,
    pub due_date: Date,
    pub description: Option<String>,
    pub status: DebtStatus,
    pub created_at: Date,
}

/// DTO for registering a new debt. New debts always start as
/// [`DebtStatus::Pending`]; a `status` in the payload is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDebt {
    #[validate(length(min = 1, message = "El nombre del cliente no puede estar vacío"))]
    pub client_name: String,
    #[validate(range(exclusive_min = 0.0, message = "El monto debe ser mayor que cero"))]
    pub amount: f64,
    pub due_date: Date,
    pub description: Option<String>,
}

/// DTO for a partial debt update. Absent fields are left untouched.
///
/// `description` may be cleared by sending an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDebt {
    #[validate(length(min = 1, message = "El nombre del cliente no puede estar vacío"))]
    pub client_name: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "El monto debe ser mayor que cero"))]
    pub amount: Option<f64>,
    pub due_date: Option<Date>,
    #[serde(default, deserialize_with = "crate::models::deserialize_some")]
    pub description: Option<Option<String>>,
    pub status: Option<DebtStatus>,
}

impl Debt {
    /// Build a pending debt from validated input.
    pub(crate) fn from_input(id: EntityId, input: &CreateDebt, created_at: Date) -> Self {
        Self {
            id,
            client_name: input.client_name.clone(),
            amount: input.amount,
            due_date: input.due_date,
            description: input.description.clone(),
            status: DebtStatus::Pending,
            created_at,
        }
    }

    /// Overwrite only the fields present in `input`.
    pub(crate) fn apply(&mut self, input: &UpdateDebt) {
        if let Some(client_name) = &input.client_name {
            self.client_name = client_name.clone();
        }
        if let Some(amount) = input.amount {
            self.amount = amount;
        }
        if let Some(due_date) = input.due_date {
            self.due_date = due_date;
        }
        if let Some(description) = &input.description {
            self.description = description.clone();
        }
        if let Some(status) = input.status {
            self.status = status;
        }
    }
}
