use crate::domain::{
    requests::product::AdjustProductRequest,
    response::{api::ApiResponse, product::ProductResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynInventoryAdjustService = Arc<dyn InventoryAdjustServiceTrait + Send + Sync>;

#[async_trait]
pub trait InventoryAdjustServiceTrait {
    async fn adjust(
        &self,
        req: &AdjustProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
}
