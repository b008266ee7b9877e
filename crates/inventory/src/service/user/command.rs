use crate::{
    abstract_trait::user::{
        repository::{DynUserCommandRepository, DynUserQueryRepository},
        service::UserCommandServiceTrait,
    },
    domain::{
        requests::{user::CreateUserRequest, validation_messages},
        response::{api::ApiResponse, user::UserResponse},
    },
    model::user::User as UserModel,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext},
};
use tracing::{info, warn};
use validator::Validate;

const DUPLICATE_EMAIL: &str = "User with this email already exists";

#[derive(Clone)]
pub struct UserCommandService {
    pub command: DynUserCommandRepository,
    pub query: DynUserQueryRepository,
    pub metrics: Metrics,
}

impl UserCommandService {
    pub fn new(
        command: DynUserCommandRepository,
        query: DynUserQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "user_command_service");

        Self {
            command,
            query,
            metrics,
        }
    }

    async fn create(&self, req: &CreateUserRequest) -> Result<UserModel, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        if self.query.find_by_email(&req.email).await?.is_some() {
            warn!("⚠️ Email already registered: {}", req.email);
            return Err(ServiceError::Conflict(DUPLICATE_EMAIL.into()));
        }

        self.command.create_user(req).await.map_err(|e| match e {
            RepositoryError::AlreadyExists(_) => ServiceError::Conflict(DUPLICATE_EMAIL.into()),
            other => ServiceError::Repo(other),
        })
    }
}

#[async_trait]
impl UserCommandServiceTrait for UserCommandService {
    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("create_user");
        info!("🆕 Creating user with email: {}", req.email);

        match self.create(req).await {
            Ok(user) => {
                tracing_ctx.complete_success(&self.metrics, Method::Post, "User created");
                Ok(ApiResponse::success("User created successfully", user.into()))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, Method::Post, &e.to_string());
                Err(e)
            }
        }
    }
}
