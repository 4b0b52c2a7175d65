//! Client entity model and DTOs.

use dunning_core::types::{Date, EntityId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A contact that reminders are delivered to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    /// Freeform phone number, e.g. `+51987654321`.
    pub phone: String,
    pub email: Option<String>,
    pub created_at: Date,
}

/// DTO for registering a new client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClient {
    #[validate(length(min = 1, message = "El nombre no puede estar vacío"))]
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

/// DTO for a partial client update. `email` may be cleared with `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateClient {
    #[validate(length(min = 1, message = "El nombre no puede estar vacío"))]
    pub name: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "crate::models::deserialize_some")]
    pub email: Option<Option<String>>,
}

impl Client {
    pub(crate) fn from_input(id: EntityId, input: &CreateClient, created_at: Date) -> Self {
        Self {
            id,
            name: input.name.clone(),
            phone: input.phone.clone(),
            email: input.email.clone(),
            created_at,
        }
    }

    pub(crate) fn apply(&mut self, input: &UpdateClient) {
        if let Some(name) = &input.name {
            self.name = name.clone();
        }
        if let Some(phone) = &input.phone {
            self.phone = phone.clone();
        }
        if let Some(email) = &input.email {
            self.email = email.clone();
        }
    }

    /// Whether a reminder can be addressed to this client.
    pub fn has_phone(&self) -> bool {
        !self.phone.trim().is_empty()
    }
}
