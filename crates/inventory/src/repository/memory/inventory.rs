use super::{InMemoryStore, MemoryState, check_product};
use crate::{
    abstract_trait::inventory::{
        DynInventoryUnitOfWork, InventoryRepositoryTrait, InventoryUnitOfWorkTrait,
    },
    model::{product::Product as ProductModel, transaction::Transaction as TransactionModel},
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use tokio::sync::OwnedMutexGuard;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct InMemoryInventoryRepository {
    store: InMemoryStore,
}

impl InMemoryInventoryRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl InventoryRepositoryTrait for InMemoryInventoryRepository {
    async fn begin(&self) -> Result<DynInventoryUnitOfWork, RepositoryError> {
        let guard = self.store.state.clone().lock_owned().await;

        Ok(Box::new(InMemoryInventoryUnitOfWork {
            guard: Some(guard),
            staged_products: Vec::new(),
            staged_transactions: Vec::new(),
            #[cfg(test)]
            ledger_offline: self.store.ledger_is_offline(),
        }))
    }
}

/// Holds the store lock for its whole lifetime and applies staged writes
/// only on commit.
pub struct InMemoryInventoryUnitOfWork {
    guard: Option<OwnedMutexGuard<MemoryState>>,
    staged_products: Vec<ProductModel>,
    staged_transactions: Vec<TransactionModel>,
    #[cfg(test)]
    ledger_offline: bool,
}

impl InMemoryInventoryUnitOfWork {
    fn state(&self) -> Result<&MemoryState, RepositoryError> {
        self.guard
            .as_deref()
            .ok_or_else(|| RepositoryError::Custom("Unit of work already committed".into()))
    }

    #[cfg(test)]
    fn ledger_reachable(&self) -> Result<(), RepositoryError> {
        if self.ledger_offline {
            return Err(RepositoryError::Custom("Ledger is offline".into()));
        }
        Ok(())
    }

    #[cfg(not(test))]
    fn ledger_reachable(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn product_exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.staged_products.iter().any(|p| p.id == id)
            || self.state()?.products.iter().any(|p| p.id == id))
    }
}

#[async_trait]
impl InventoryUnitOfWorkTrait for InMemoryInventoryUnitOfWork {
    async fn lock_product(&mut self, id: Uuid) -> Result<Option<ProductModel>, RepositoryError> {
        if let Some(staged) = self.staged_products.iter().find(|p| p.id == id) {
            return Ok(Some(staged.clone()));
        }

        Ok(self.state()?.products.iter().find(|p| p.id == id).cloned())
    }

    async fn save_product(
        &mut self,
        product: &ProductModel,
    ) -> Result<ProductModel, RepositoryError> {
        self.state()?;
        check_product(product)?;

        let mut staged = product.clone();
        staged.updated_at = Utc::now();

        self.staged_products.retain(|p| p.id != staged.id);
        self.staged_products.push(staged.clone());

        Ok(staged)
    }

    async fn append_transaction(
        &mut self,
        record: &TransactionModel,
    ) -> Result<TransactionModel, RepositoryError> {
        self.ledger_reachable()?;

        let state = self.state()?;

        if !state.users.iter().any(|u| u.id == record.user_id) {
            return Err(RepositoryError::ForeignKey("transactions_user_id_fkey".into()));
        }
        if !self.product_exists(record.product_id)? {
            return Err(RepositoryError::ForeignKey(
                "transactions_product_id_fkey".into(),
            ));
        }
        if state.transactions.iter().any(|t| t.id == record.id)
            || self.staged_transactions.iter().any(|t| t.id == record.id)
        {
            return Err(RepositoryError::AlreadyExists("transactions_pkey".into()));
        }

        self.staged_transactions.push(record.clone());

        Ok(record.clone())
    }

    async fn commit(&mut self) -> Result<(), RepositoryError> {
        self.state()?;
        for product in &self.staged_products {
            check_product(product)?;
        }

        let mut guard = self
            .guard
            .take()
            .ok_or_else(|| RepositoryError::Custom("Unit of work already committed".into()))?;

        for product in self.staged_products.drain(..) {
            guard.upsert_product(product)?;
        }
        guard.transactions.append(&mut self.staged_transactions);

        info!("💾 In-memory stock transaction committed");

        Ok(())
    }
}
