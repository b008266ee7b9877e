use super::InMemoryStore;
use crate::{
    abstract_trait::user::repository::{UserCommandRepositoryTrait, UserQueryRepositoryTrait},
    domain::requests::user::CreateUserRequest,
    model::user::User as UserModel,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: InMemoryStore,
}

impl InMemoryUserRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for InMemoryUserRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let mut state = self.store.state.lock().await;

        if state.users.iter().any(|u| u.email == req.email) {
            return Err(RepositoryError::AlreadyExists("users_email_key".into()));
        }

        let now = Utc::now();
        let user = UserModel {
            id: Uuid::now_v7(),
            email: req.email.clone(),
            name: req.name.clone(),
            phone: req.phone.clone(),
            created_at: now,
            updated_at: now,
        };

        state.users.push(user.clone());
        info!("✅ User stored in memory with id: {}", user.id);

        Ok(user)
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
        Ok(self.store.state.lock().await.users.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }
}
