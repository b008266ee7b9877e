use crate::{
    abstract_trait::transaction::{DynTransactionQueryRepository, TransactionQueryServiceTrait},
    domain::{
        requests::transaction::{FindTransactions, TransactionFilter},
        response::{api::ApiResponse, transaction::TransactionResponse},
    },
    model::transaction::Transaction as TransactionModel,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct TransactionQueryService {
    pub query: DynTransactionQueryRepository,
    pub metrics: Metrics,
}

impl TransactionQueryService {
    pub fn new(query: DynTransactionQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "transaction_query_service");

        Self { query, metrics }
    }

    /// Exactly one repository path is consulted per filter.
    async fn list(&self, filter: TransactionFilter) -> Result<Vec<TransactionModel>, ServiceError> {
        let rows = match filter {
            TransactionFilter::ByProduct(product_id) => {
                self.query.find_by_product(product_id).await?
            }
            TransactionFilter::ByUser(user_id) => self.query.find_by_user(user_id).await?,
            TransactionFilter::All => self.query.find_all().await?,
        };

        Ok(rows)
    }
}

#[async_trait]
impl TransactionQueryServiceTrait for TransactionQueryService {
    async fn find_transactions(
        &self,
        req: &FindTransactions,
    ) -> Result<ApiResponse<Vec<TransactionResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_transactions");

        let result = match req.filter() {
            Ok(filter) => {
                info!("🔍 Listing transactions with filter: {filter:?}");
                self.list(filter).await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(rows) => {
                let data: Vec<TransactionResponse> =
                    rows.into_iter().map(TransactionResponse::from).collect();
                tracing_ctx.complete_success(
                    &self.metrics,
                    Method::Get,
                    &format!("Fetched {} transactions", data.len()),
                );
                Ok(ApiResponse::success("Transactions retrieved successfully", data))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                Err(e)
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_transaction_by_id");

        let result = match self.query.find_by_id(id).await {
            Ok(Some(row)) => Ok(row),
            Ok(None) => Err(ServiceError::NotFound(format!(
                "Transaction with ID {id} not found"
            ))),
            Err(e) => Err(ServiceError::Repo(e)),
        };

        match result {
            Ok(row) => {
                tracing_ctx.complete_success(&self.metrics, Method::Get, "Transaction found");
                Ok(ApiResponse::success("Transaction retrieved successfully", row.into()))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::transaction::TransactionQueryRepositoryTrait;
    use shared::errors::RepositoryError;
    use std::sync::{Arc, Mutex};

    /// Records which lookup path the service took.
    #[derive(Default)]
    struct RecordingRepository {
        calls: Mutex<Vec<&'static str>>,
    }

    impl RecordingRepository {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl TransactionQueryRepositoryTrait for RecordingRepository {
        async fn find_all(&self) -> Result<Vec<TransactionModel>, RepositoryError> {
            self.record("all");
            Ok(vec![])
        }

        async fn find_by_product(
            &self,
            _product_id: Uuid,
        ) -> Result<Vec<TransactionModel>, RepositoryError> {
            self.record("product");
            Ok(vec![])
        }

        async fn find_by_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<TransactionModel>, RepositoryError> {
            self.record("user");
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<TransactionModel>, RepositoryError> {
            Ok(None)
        }
    }

    fn service() -> (TransactionQueryService, Arc<RecordingRepository>) {
        let repo = Arc::new(RecordingRepository::default());
        let service = TransactionQueryService::new(repo.clone(), &mut Registry::default());
        (service, repo)
    }

    fn find(product_id: Option<Uuid>, user_id: Option<Uuid>) -> FindTransactions {
        FindTransactions {
            product_id: product_id.map(|id| id.to_string()),
            user_id: user_id.map(|id| id.to_string()),
        }
    }

    #[tokio::test]
    async fn product_filter_never_delegates_to_user_path() {
        let (service, repo) = service();

        service
            .find_transactions(&find(Some(Uuid::now_v7()), Some(Uuid::now_v7())))
            .await
            .unwrap();

        assert_eq!(repo.calls(), vec!["product"]);
    }

    #[tokio::test]
    async fn user_filter_and_no_filter_take_their_own_paths() {
        let (service, repo) = service();

        service
            .find_transactions(&find(None, Some(Uuid::now_v7())))
            .await
            .unwrap();
        service.find_transactions(&find(None, None)).await.unwrap();

        assert_eq!(repo.calls(), vec!["user", "all"]);
    }

    #[tokio::test]
    async fn malformed_filter_is_rejected_before_any_lookup() {
        let (service, repo) = service();

        let err = service
            .find_transactions(&FindTransactions {
                product_id: Some("not-a-uuid".into()),
                user_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_transaction_is_not_found() {
        let (service, _) = service();
        let err = service.find_by_id(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
