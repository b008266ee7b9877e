use crate::{
    abstract_trait::product::service::DynProductQueryService,
    domain::response::{api::ApiResponse, product::ProductResponse, status::HealthResponse},
    handler::path_id,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/status/health",
    tag = "Status",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

#[utoipa::path(
    get,
    path = "/status/{productId}",
    tag = "Status",
    params(("productId" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Current product state", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found"),
    )
)]
pub async fn get_product_status(
    Extension(service): Extension<DynProductQueryService>,
    product_id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(path_id(product_id)?).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn status_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/status/health", get(health_check))
        .route("/status/{productId}", get(get_product_status))
        .layer(Extension(app_state.di_container.product_query.clone()))
}
