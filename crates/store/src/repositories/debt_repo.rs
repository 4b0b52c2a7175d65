//! Repository for the debt collection.

use dunning_core::error::CoreError;
use dunning_core::types::{new_id, today};
use dunning_core::validation::validate_input;

use crate::models::debt::{CreateDebt, Debt, UpdateDebt};
use crate::models::status::DebtStatus;
use crate::MemoryStore;

/// Provides CRUD operations for debts.
pub struct DebtRepo;

impl DebtRepo {
    /// Validate and append a new pending debt, returning the stored row.
    pub async fn create(store: &MemoryStore, input: &CreateDebt) -> Result<Debt, CoreError> {
        validate_input(input)?;
        let debt = Debt::from_input(new_id(), input, today());
        store.debts.write().await.push(debt.clone());
        tracing::debug!(debt_id = %debt.id, client_name = %debt.client_name, "Debt created");
        Ok(debt)
    }

    /// List debts in insertion order, optionally restricted to one status.
    pub async fn list(store: &MemoryStore, status: Option<DebtStatus>) -> Vec<Debt> {
        let debts = store.debts.read().await;
        debts
            .iter()
            .filter(|d| status.map_or(true, |s| d.status == s))
            .cloned()
            .collect()
    }

    pub async fn find_by_id(store: &MemoryStore, id: &str) -> Option<Debt> {
        let debts = store.debts.read().await;
        debts.iter().find(|d| d.id == id).cloned()
    }

    /// Apply a partial update. Returns `Ok(None)` if no debt has `id`.
    pub async fn update(
        store: &MemoryStore,
        id: &str,
        input: &UpdateDebt,
    ) -> Result<Option<Debt>, CoreError> {
        validate_input(input)?;
        let mut debts = store.debts.write().await;
        let Some(debt) = debts.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        debt.apply(input);
        tracing::debug!(debt_id = %id, "Debt updated");
        Ok(Some(debt.clone()))
    }

    /// Remove a debt. Returns `true` if a row was removed.
    pub async fn delete(store: &MemoryStore, id: &str) -> bool {
        let mut debts = store.debts.write().await;
        let before = debts.len();
        debts.retain(|d| d.id != id);
        let deleted = debts.len() < before;
        if deleted {
            tracing::debug!(debt_id = %id, "Debt deleted");
        }
        deleted
    }
}
