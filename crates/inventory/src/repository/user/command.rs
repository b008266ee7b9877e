use crate::{
    abstract_trait::user::repository::UserCommandRepositoryTrait,
    domain::requests::user::CreateUserRequest, model::user::User as UserModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        info!("🆕 Inserting user with email: {}", req.email);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (id, email, name, phone, created_at, updated_at)
            VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING id, email, name, phone, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&req.email)
        .bind(&req.name)
        .bind(&req.phone)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert user {}: {:?}", req.email, e);
            RepositoryError::from(e)
        })?;

        info!("✅ User inserted with id: {}", user.id);

        Ok(user)
    }
}
