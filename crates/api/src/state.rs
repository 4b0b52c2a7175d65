use std::sync::Arc;

use dunning_events::{LogNotifier, ReminderDispatcher};
use dunning_store::{MemoryStore, StoreHandle};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory debt and client collections.
    pub store: StoreHandle,
    /// Reminder dispatch (simulated delivery in production).
    pub reminders: ReminderDispatcher,
}

impl AppState {
    /// Production wiring: a fresh store (seeded if configured) and the
    /// logging notifier.
    pub fn from_config(config: &ServerConfig) -> Self {
        let store = if config.seed_sample_data {
            MemoryStore::seeded()
        } else {
            MemoryStore::new()
        };

        Self {
            store: Arc::new(store),
            reminders: ReminderDispatcher::new(Arc::new(LogNotifier)),
        }
    }
}
