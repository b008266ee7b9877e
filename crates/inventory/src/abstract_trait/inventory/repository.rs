use crate::model::{product::Product as ProductModel, transaction::Transaction as TransactionModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynInventoryRepository = Arc<dyn InventoryRepositoryTrait + Send + Sync>;
pub type DynInventoryUnitOfWork = Box<dyn InventoryUnitOfWorkTrait + Send>;

#[async_trait]
pub trait InventoryRepositoryTrait {
    async fn begin(&self) -> Result<DynInventoryUnitOfWork, RepositoryError>;
}

/// One atomic stock change. Writes become visible only after `commit`;
/// dropping the unit of work discards them.
#[async_trait]
pub trait InventoryUnitOfWorkTrait {
    /// Loads the product and holds it against other adjustments until the
    /// unit of work ends.
    async fn lock_product(&mut self, id: Uuid) -> Result<Option<ProductModel>, RepositoryError>;

    async fn save_product(&mut self, product: &ProductModel)
    -> Result<ProductModel, RepositoryError>;

    async fn append_transaction(
        &mut self,
        record: &TransactionModel,
    ) -> Result<TransactionModel, RepositoryError>;

    async fn commit(&mut self) -> Result<(), RepositoryError>;
}
