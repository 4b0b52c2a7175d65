//! Outbound notification channels.
//!
//! A [`Notifier`] delivers one plain-text message to one client. The only
//! implementation shipped here, [`LogNotifier`], records the dispatch in the
//! trace log and always succeeds.

use async_trait::async_trait;
use dunning_store::models::client::Client;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The provider refused or could not accept the message.
    #[error("Provider rejected message: {0}")]
    Rejected(String),

    /// The provider could not be reached.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Capability to send a message to a client's phone.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Short channel name used in logs (e.g. `"log"`, `"sms"`).
    fn channel(&self) -> &'static str;

    async fn notify(&self, client: &Client, message: &str) -> Result<(), DeliveryError>;
}

// ---------------------------------------------------------------------------
// LogNotifier
// ---------------------------------------------------------------------------

/// Simulated delivery: logs the message instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn channel(&self) -> &'static str {
        "log"
    }

    async fn notify(&self, client: &Client, message: &str) -> Result<(), DeliveryError> {
        tracing::info!(
            client_id = %client.id,
            client_name = %client.name,
            phone = %client.phone,
            body = message,
            "Simulated reminder dispatch"
        );
        Ok(())
    }
}
