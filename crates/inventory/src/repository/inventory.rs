use crate::{
    abstract_trait::inventory::{
        DynInventoryUnitOfWork, InventoryRepositoryTrait, InventoryUnitOfWorkTrait,
    },
    model::{product::Product as ProductModel, transaction::Transaction as TransactionModel},
    repository::product::upsert_product,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{PgConnection, Postgres, Transaction};
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct InventoryRepository {
    db: ConnectionPool,
}

impl InventoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryRepositoryTrait for InventoryRepository {
    async fn begin(&self) -> Result<DynInventoryUnitOfWork, RepositoryError> {
        let tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin stock transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(Box::new(PgInventoryUnitOfWork { tx: Some(tx) }))
    }
}

/// Wraps a database transaction. The product row stays locked with
/// `FOR UPDATE` until commit or rollback; sqlx rolls back on drop.
pub struct PgInventoryUnitOfWork {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgInventoryUnitOfWork {
    fn conn(&mut self) -> Result<&mut PgConnection, RepositoryError> {
        self.tx
            .as_deref_mut()
            .ok_or_else(|| RepositoryError::Custom("Unit of work already committed".into()))
    }
}

#[async_trait]
impl InventoryUnitOfWorkTrait for PgInventoryUnitOfWork {
    async fn lock_product(&mut self, id: Uuid) -> Result<Option<ProductModel>, RepositoryError> {
        let conn = self.conn()?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, name, description, price, quantity, status, created_at, updated_at
            FROM products
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to lock product {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(product)
    }

    async fn save_product(
        &mut self,
        product: &ProductModel,
    ) -> Result<ProductModel, RepositoryError> {
        let conn = self.conn()?;

        upsert_product(conn, product).await.map_err(|e| {
            error!("❌ Failed to write product {}: {:?}", product.id, e);
            e
        })
    }

    async fn append_transaction(
        &mut self,
        record: &TransactionModel,
    ) -> Result<TransactionModel, RepositoryError> {
        let conn = self.conn()?;

        let stored = sqlx::query_as::<_, TransactionModel>(
            r#"
            INSERT INTO transactions (
                id, transaction_type, quantity, previous_quantity, new_quantity,
                notes, created_at, user_id, product_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, transaction_type, quantity, previous_quantity, new_quantity,
                      notes, created_at, user_id, product_id
            "#,
        )
        .bind(record.id)
        .bind(record.transaction_type)
        .bind(record.quantity)
        .bind(record.previous_quantity)
        .bind(record.new_quantity)
        .bind(&record.notes)
        .bind(record.created_at)
        .bind(record.user_id)
        .bind(record.product_id)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            warn!("⚠️ Failed to append ledger entry for product {}: {:?}", record.product_id, e);
            RepositoryError::from(e)
        })?;

        Ok(stored)
    }

    async fn commit(&mut self) -> Result<(), RepositoryError> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| RepositoryError::Custom("Unit of work already committed".into()))?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit stock transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("💾 Stock transaction committed");

        Ok(())
    }
}
