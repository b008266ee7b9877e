use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    model::product::{NewProduct, Product as ProductModel},
    repository::product::upsert_product,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, product: &NewProduct) -> Result<ProductModel, RepositoryError> {
        info!("🆕 Inserting product: {}", product.name);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let created = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (id, name, description, price, quantity, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING id, name, description, price, quantity, status, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity)
        .bind(&product.status)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert product {}: {:?}", product.name, e);
            RepositoryError::from(e)
        })?;

        info!("✅ Product inserted with id: {}", created.id);

        Ok(created)
    }

    async fn save_product(&self, product: &ProductModel) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        upsert_product(&mut *conn, product).await.map_err(|e| {
            error!("❌ Failed to save product {}: {:?}", product.id, e);
            e
        })
    }
}
