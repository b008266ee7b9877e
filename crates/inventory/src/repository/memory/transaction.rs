use super::InMemoryStore;
use crate::{
    abstract_trait::transaction::TransactionQueryRepositoryTrait,
    model::transaction::Transaction as TransactionModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct InMemoryTransactionRepository {
    store: InMemoryStore,
}

impl InMemoryTransactionRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for InMemoryTransactionRepository {
    async fn find_all(&self) -> Result<Vec<TransactionModel>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state.ledger_newest_first(|_| true))
    }

    async fn find_by_product(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state.ledger_newest_first(|t| t.product_id == product_id))
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<TransactionModel>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state.ledger_newest_first(|t| t.user_id == user_id))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TransactionModel>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state.transactions.iter().find(|t| t.id == id).cloned())
    }
}
