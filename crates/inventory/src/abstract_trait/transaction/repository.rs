use crate::model::transaction::Transaction as TransactionModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;

/// Read side of the ledger. Every listing is newest first.
#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<TransactionModel>, RepositoryError>;
    async fn find_by_product(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<TransactionModel>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TransactionModel>, RepositoryError>;
}
