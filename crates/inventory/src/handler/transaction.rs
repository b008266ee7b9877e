use crate::{
    abstract_trait::transaction::DynTransactionQueryService,
    domain::{
        requests::transaction::FindTransactions,
        response::{api::ApiResponse, transaction::TransactionResponse},
    },
    handler::path_id,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query, rejection::PathRejection},
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
    path = "/transactions",
    tag = "Transaction",
    params(FindTransactions),
    responses(
        (status = 200, description = "Ledger entries, newest first", body = ApiResponse<Vec<TransactionResponse>>),
        (status = 400, description = "Malformed filter"),
    )
)]
pub async fn get_transactions(
    Extension(service): Extension<DynTransactionQueryService>,
    Query(params): Query<FindTransactions>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_transactions(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/transactions/{id}",
    tag = "Transaction",
    params(("id" = Uuid, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Ledger entry", body = ApiResponse<TransactionResponse>),
        (status = 404, description = "Transaction not found"),
    )
)]
pub async fn get_transaction(
    Extension(service): Extension<DynTransactionQueryService>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(path_id(id)?).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn transaction_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/transactions", get(get_transactions))
        .route("/transactions/{id}", get(get_transaction))
        .layer(Extension(app_state.di_container.transaction_query.clone()))
}
