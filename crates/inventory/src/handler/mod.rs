mod product;
mod status;
mod transaction;
mod user;

use crate::{
    domain::{
        requests::{
            product::{AdjustProductRequest, CreateProductRequest},
            user::CreateUserRequest,
        },
        response::{
            api::ApiResponse,
            product::ProductResponse,
            status::{AppInfoResponse, HealthResponse},
            transaction::TransactionResponse,
            user::UserResponse,
        },
    },
    model::transaction::TransactionType,
    state::AppState,
};
use anyhow::Result;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, State, rejection::PathRejection},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{
    errors::{ErrorResponse, HttpError},
    utils::shutdown_signal,
};
use std::{collections::BTreeMap, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

pub use self::product::product_routes;
pub use self::status::status_routes;
pub use self::transaction::transaction_routes;
pub use self::user::user_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        app_info,
        user::create_user,
        user::get_users,
        user::get_user,
        product::create_product,
        product::get_products,
        product::adjust_product,
        status::health_check,
        status::get_product_status,
        transaction::get_transactions,
        transaction::get_transaction,
    ),
    components(schemas(
        ErrorResponse,
        CreateUserRequest,
        CreateProductRequest,
        AdjustProductRequest,
        UserResponse,
        ProductResponse,
        TransactionResponse,
        TransactionType,
        HealthResponse,
        AppInfoResponse,
        ApiResponse<ProductResponse>,
    )),
    tags(
        (name = "App", description = "Service information"),
        (name = "User", description = "User endpoints"),
        (name = "Product", description = "Product and stock adjustment endpoints"),
        (name = "Status", description = "Health and product status endpoints"),
        (name = "Transaction", description = "Stock ledger endpoints"),
    )
)]
struct ApiDoc;

/// Turns a rejected `{id}` segment into the JSON error shape.
pub(crate) fn path_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, HttpError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "App",
    responses((status = 200, description = "Service information", body = AppInfoResponse))
)]
pub async fn app_info() -> impl IntoResponse {
    let endpoints = BTreeMap::from([
        ("users".to_string(), "/users".to_string()),
        ("products".to_string(), "/products".to_string()),
        ("adjust".to_string(), "/products/adjust".to_string()),
        ("status".to_string(), "/status/{productId}".to_string()),
        ("health".to_string(), "/status/health".to_string()),
        ("transactions".to_string(), "/transactions".to_string()),
        ("metrics".to_string(), "/metrics".to_string()),
        ("docs".to_string(), "/swagger-ui".to_string()),
    ]);

    Json(AppInfoResponse {
        name: "Inventory Management API".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        description: env!("CARGO_PKG_DESCRIPTION").into(),
        endpoints,
    })
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    if let Err(e) = encode(&mut buffer, &state.registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/", get(app_info))
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(user_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(status_routes(shared_state.clone()))
            .merge(transaction_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
