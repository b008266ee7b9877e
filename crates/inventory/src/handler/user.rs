use crate::{
    abstract_trait::user::service::{DynUserCommandService, DynUserQueryService},
    domain::{
        requests::user::CreateUserRequest,
        response::{api::ApiResponse, user::UserResponse},
    },
    handler::path_id,
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/users",
    tag = "User",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserResponse>),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Email already registered"),
    )
)]
pub async fn create_user(
    Extension(service): Extension<DynUserCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_user(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "User",
    responses((status = 200, description = "All users", body = ApiResponse<Vec<UserResponse>>))
)]
pub async fn get_users(
    Extension(service): Extension<DynUserQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "User",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found"),
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserQueryService>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(path_id(id)?).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/users", post(create_user).get(get_users))
        .route("/users/{id}", get(get_user))
        .layer(Extension(app_state.di_container.user_command.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
}
