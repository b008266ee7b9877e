use crate::{
    abstract_trait::transaction::TransactionQueryRepositoryTrait,
    model::transaction::Transaction as TransactionModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct TransactionQueryRepository {
    db: ConnectionPool,
}

impl TransactionQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn find_all(&self) -> Result<Vec<TransactionModel>, RepositoryError> {
        info!("🔍 Fetching full ledger");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, TransactionModel>(
            r#"
            SELECT id, transaction_type, quantity, previous_quantity, new_quantity,
                   notes, created_at, user_id, product_id
            FROM transactions
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch transactions: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_by_product(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        info!("🔍 Fetching transactions for product: {product_id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, TransactionModel>(
            r#"
            SELECT id, transaction_type, quantity, previous_quantity, new_quantity,
                   notes, created_at, user_id, product_id
            FROM transactions
            WHERE product_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch transactions for product {product_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<TransactionModel>, RepositoryError> {
        info!("🔍 Fetching transactions for user: {user_id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, TransactionModel>(
            r#"
            SELECT id, transaction_type, quantity, previous_quantity, new_quantity,
                   notes, created_at, user_id, product_id
            FROM transactions
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch transactions for user {user_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TransactionModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, TransactionModel>(
            r#"
            SELECT id, transaction_type, quantity, previous_quantity, new_quantity,
                   notes, created_at, user_id, product_id
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch transaction {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(row)
    }
}
