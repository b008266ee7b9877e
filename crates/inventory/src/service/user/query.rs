use crate::{
    abstract_trait::user::{repository::DynUserQueryRepository, service::UserQueryServiceTrait},
    domain::response::{api::ApiResponse, user::UserResponse},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserQueryService {
    pub query: DynUserQueryRepository,
    pub metrics: Metrics,
}

impl UserQueryService {
    pub fn new(query: DynUserQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "user_query_service");

        Self { query, metrics }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_all_users");

        match self.query.find_all().await {
            Ok(users) => {
                let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
                tracing_ctx.complete_success(
                    &self.metrics,
                    Method::Get,
                    &format!("Fetched {} users", data.len()),
                );
                Ok(ApiResponse::success("Users retrieved successfully", data))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_user_by_id");

        let result = match self.query.find_by_id(id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(ServiceError::NotFound(format!("User with ID {id} not found"))),
            Err(e) => Err(ServiceError::Repo(e)),
        };

        match result {
            Ok(user) => {
                tracing_ctx.complete_success(&self.metrics, Method::Get, "User found");
                Ok(ApiResponse::success("User retrieved successfully", user.into()))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                Err(e)
            }
        }
    }
}
