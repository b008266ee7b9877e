use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::{product::CreateProductRequest, validation_messages},
        response::{api::ApiResponse, product::ProductResponse},
    },
    model::product::{DEFAULT_PRODUCT_STATUS, NewProduct},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_command_service");

        Self { command, metrics }
    }

    fn to_new_product(req: &CreateProductRequest) -> Result<NewProduct, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let price = Decimal::from_f64(req.price)
            .map(|p| p.round_dp(2))
            .ok_or_else(|| ServiceError::Validation(vec!["price: must be a number".into()]))?;

        let status = req
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_PRODUCT_STATUS)
            .to_string();

        Ok(NewProduct {
            name: req.name.clone(),
            description: req.description.clone(),
            price,
            quantity: req.quantity,
            status,
        })
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("create_product");
        info!("🆕 Creating product: {}", req.name);

        let result = match Self::to_new_product(req) {
            Ok(product) => self
                .command
                .create_product(&product)
                .await
                .map_err(ServiceError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(product) => {
                tracing_ctx.complete_success(&self.metrics, Method::Post, "Product created");
                Ok(ApiResponse::success("Product created successfully", product.into()))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, Method::Post, &e.to_string());
                Err(e)
            }
        }
    }
}
