use super::{InMemoryStore, check_product};
use crate::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    model::product::{NewProduct, Product as ProductModel},
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    store: InMemoryStore,
}

impl InMemoryProductRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductRepository {
    async fn create_product(&self, product: &NewProduct) -> Result<ProductModel, RepositoryError> {
        let now = Utc::now();
        let created = ProductModel {
            id: Uuid::now_v7(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            quantity: product.quantity,
            status: product.status.clone(),
            created_at: now,
            updated_at: now,
        };

        check_product(&created)?;
        self.store.state.lock().await.products.push(created.clone());
        info!("✅ Product stored in memory with id: {}", created.id);

        Ok(created)
    }

    async fn save_product(&self, product: &ProductModel) -> Result<ProductModel, RepositoryError> {
        let mut state = self.store.state.lock().await;
        state.upsert_product(product.clone())
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        Ok(self.store.state.lock().await.products.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductModel>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }
}
