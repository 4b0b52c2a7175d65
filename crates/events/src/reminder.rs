//! Payment reminders for a single debt.
//!
//! Debts reference clients only by name, so the dispatcher joins
//! `Debt::client_name` to `Client::name` (exact match, first client in
//! insertion order wins) before handing the message to a [`Notifier`].

use std::sync::Arc;

use dunning_core::error::CoreError;
use dunning_core::types::EntityId;
use dunning_store::models::client::Client;
use dunning_store::models::debt::Debt;
use dunning_store::repositories::{ClientRepo, DebtRepo};
use dunning_store::MemoryStore;
use serde::Serialize;

use crate::delivery::{DeliveryError, Notifier};

/// Failure modes of [`ReminderDispatcher::send`].
#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    /// Unknown debt, or no reachable client for it.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The notifier failed to deliver the message.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Confirmation returned once a reminder has been handed to the notifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReminderReceipt {
    pub message: String,
    pub debt_id: EntityId,
    pub client_id: EntityId,
    pub channel: &'static str,
}

/// Sends payment reminders through an injected [`Notifier`].
#[derive(Clone)]
pub struct ReminderDispatcher {
    notifier: Arc<dyn Notifier>,
}

impl ReminderDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Send a reminder for the debt with `debt_id`.
    ///
    /// - `CoreError::NotFound` if the debt does not exist.
    /// - `CoreError::PreconditionFailed` if no client matches the debt's
    ///   `client_name`, or that client has no phone number.
    pub async fn send(
        &self,
        store: &MemoryStore,
        debt_id: &str,
    ) -> Result<ReminderReceipt, ReminderError> {
        let debt = DebtRepo::find_by_id(store, debt_id)
            .await
            .ok_or_else(|| CoreError::not_found("Debt", debt_id))?;

        let client = ClientRepo::find_by_name(store, &debt.client_name)
            .await
            .filter(Client::has_phone)
            .ok_or_else(|| {
                CoreError::PreconditionFailed(format!(
                    "Información de contacto del cliente '{}' no disponible",
                    debt.client_name
                ))
            })?;

        let message = compose_message(&client, &debt);
        self.notifier.notify(&client, &message).await?;

        tracing::info!(
            debt_id = %debt.id,
            client_id = %client.id,
            channel = self.notifier.channel(),
            "Reminder dispatched"
        );

        Ok(ReminderReceipt {
            message: format!("Recordatorio simulado enviado para la deuda {}", debt.id),
            debt_id: debt.id,
            client_id: client.id,
            channel: self.notifier.channel(),
        })
    }
}

/// Render the reminder text delivered to the client.
pub fn compose_message(client: &Client, debt: &Debt) -> String {
    format!(
        "Hola {}, te recordamos que tu deuda de ${:.2} vence el {}. ¡Gracias!",
        client.name, debt.amount, debt.due_date
    )
}
