use crate::{
    abstract_trait::{
        inventory::DynInventoryAdjustService,
        product::service::{DynProductCommandService, DynProductQueryService},
    },
    domain::{
        requests::product::{AdjustProductRequest, CreateProductRequest},
        response::{api::ApiResponse, product::ProductResponse},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    responses((status = 200, description = "All products", body = ApiResponse<Vec<ProductResponse>>))
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/products/adjust",
    tag = "Product",
    request_body = AdjustProductRequest,
    responses(
        (status = 200, description = "Quantity adjusted and recorded", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid input or the result would be negative"),
        (status = 404, description = "Product or user not found"),
    )
)]
pub async fn adjust_product(
    Extension(service): Extension<DynInventoryAdjustService>,
    SimpleValidatedJson(body): SimpleValidatedJson<AdjustProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.adjust(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products", post(create_product).get(get_products))
        .route("/products/adjust", put(adjust_product))
        .layer(Extension(app_state.di_container.product_command.clone()))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.inventory_adjust.clone()))
}
