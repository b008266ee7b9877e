use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::{api::ApiResponse, product::ProductResponse},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_query_service");

        Self { query, metrics }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_all_products");

        match self.query.find_all().await {
            Ok(products) => {
                let data: Vec<ProductResponse> =
                    products.into_iter().map(ProductResponse::from).collect();
                tracing_ctx.complete_success(
                    &self.metrics,
                    Method::Get,
                    &format!("Fetched {} products", data.len()),
                );
                Ok(ApiResponse::success("Products retrieved successfully", data))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("get_product_status");

        let result = match self.query.find_by_id(id).await {
            Ok(Some(product)) => Ok(product),
            Ok(None) => Err(ServiceError::NotFound(format!(
                "Product with ID {id} not found"
            ))),
            Err(e) => Err(ServiceError::Repo(e)),
        };

        match result {
            Ok(product) => {
                tracing_ctx.complete_success(&self.metrics, Method::Get, "Product found");
                Ok(ApiResponse::success("Product status retrieved successfully", product.into()))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                Err(e)
            }
        }
    }
}
