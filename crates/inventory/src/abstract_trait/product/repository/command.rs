use crate::model::product::{NewProduct, Product as ProductModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, product: &NewProduct) -> Result<ProductModel, RepositoryError>;
    /// Inserts or replaces the row keyed by `product.id`, refreshing `updated_at`.
    async fn save_product(&self, product: &ProductModel) -> Result<ProductModel, RepositoryError>;
}
