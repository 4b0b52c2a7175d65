//! In-memory storage for debts and clients.
//!
//! [`MemoryStore`] owns two insertion-ordered collections, each behind its
//! own `RwLock`. The repositories in [`repositories`] are the only code that
//! reads or mutates them.

pub mod models;
pub mod repositories;
pub mod seed;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::client::Client;
use crate::models::debt::Debt;

/// Shared handle to the store, cloned into every request.
pub type StoreHandle = Arc<MemoryStore>;

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) debts: RwLock<Vec<Debt>>,
    pub(crate) clients: RwLock<Vec<Client>>,
}

/// Row counts per collection, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub debts: usize,
    pub clients: usize,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the sample clients and debts from [`seed`].
    pub fn seeded() -> Self {
        Self {
            debts: RwLock::new(seed::debts()),
            clients: RwLock::new(seed::clients()),
        }
    }

    pub async fn counts(&self) -> StoreCounts {
        let debts = self.debts.read().await.len();
        let clients = self.clients.read().await.len();
        StoreCounts { debts, clients }
    }
}
