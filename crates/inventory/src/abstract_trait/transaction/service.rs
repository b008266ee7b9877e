use crate::domain::{
    requests::transaction::FindTransactions,
    response::{api::ApiResponse, transaction::TransactionResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynTransactionQueryService = Arc<dyn TransactionQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryServiceTrait {
    async fn find_transactions(
        &self,
        req: &FindTransactions,
    ) -> Result<ApiResponse<Vec<TransactionResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<TransactionResponse>, ServiceError>;
}
