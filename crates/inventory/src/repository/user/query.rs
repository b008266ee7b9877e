use crate::{
    abstract_trait::user::repository::UserQueryRepositoryTrait, model::user::User as UserModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
        info!("🔍 Fetching all users");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let users = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, email, name, phone, created_at, updated_at
            FROM users
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch users: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(users)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, RepositoryError> {
        info!("🔍 Fetching user by id: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, email, name, phone, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch user {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, email, name, phone, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch user by email: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(user)
    }
}
