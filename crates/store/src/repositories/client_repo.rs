//! Repository for the client collection.

use dunning_core::error::CoreError;
use dunning_core::types::{new_id, today};
use dunning_core::validation::validate_input;

use crate::models::client::{Client, CreateClient, UpdateClient};
use crate::MemoryStore;

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    pub async fn create(store: &MemoryStore, input: &CreateClient) -> Result<Client, CoreError> {
        validate_input(input)?;
        let client = Client::from_input(new_id(), input, today());
        store.clients.write().await.push(client.clone());
        tracing::debug!(client_id = %client.id, name = %client.name, "Client created");
        Ok(client)
    }

    /// List all clients in insertion order.
    pub async fn list(store: &MemoryStore) -> Vec<Client> {
        store.clients.read().await.clone()
    }

    pub async fn find_by_id(store: &MemoryStore, id: &str) -> Option<Client> {
        let clients = store.clients.read().await;
        clients.iter().find(|c| c.id == id).cloned()
    }

    /// First client whose name equals `name` exactly, in insertion order.
    pub async fn find_by_name(store: &MemoryStore, name: &str) -> Option<Client> {
        let clients = store.clients.read().await;
        clients.iter().find(|c| c.name == name).cloned()
    }

    /// Apply a partial update. Returns `Ok(None)` if no client has `id`.
    pub async fn update(
        store: &MemoryStore,
        id: &str,
        input: &UpdateClient,
    ) -> Result<Option<Client>, CoreError> {
        validate_input(input)?;
        let mut clients = store.clients.write().await;
        let Some(client) = clients.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        client.apply(input);
        tracing::debug!(client_id = %id, "Client updated");
        Ok(Some(client.clone()))
    }

    /// Remove a client. Returns `true` if a row was removed.
    pub async fn delete(store: &MemoryStore, id: &str) -> bool {
        let mut clients = store.clients.write().await;
        let before = clients.len();
        clients.retain(|c| c.id != id);
        let deleted = clients.len() < before;
        if deleted {
            tracing::debug!(client_id = %id, "Client deleted");
        }
        deleted
    }
}
