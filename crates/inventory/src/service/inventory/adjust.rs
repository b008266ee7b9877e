use crate::{
    abstract_trait::inventory::{DynInventoryRepository, InventoryAdjustServiceTrait},
    domain::{
        requests::product::AdjustProductRequest,
        response::{api::ApiResponse, product::ProductResponse},
    },
    model::{product::Product as ProductModel, transaction::TransactionType},
    service::inventory::ledger::{LedgerEntry, LedgerWriter},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext},
};
use tracing::{info, warn};

pub const NEGATIVE_QUANTITY: &str = "Adjustment would result in negative quantity";

/// Applies `delta` to `previous`, refusing results below zero or beyond the
/// column range.
pub fn next_quantity(previous: i32, delta: i32) -> Result<i32, ServiceError> {
    match previous.checked_add(delta) {
        Some(next) if next >= 0 => Ok(next),
        Some(_) => Err(ServiceError::InvalidAdjustment(NEGATIVE_QUANTITY.into())),
        None if delta < 0 => Err(ServiceError::InvalidAdjustment(NEGATIVE_QUANTITY.into())),
        None => Err(ServiceError::InvalidAdjustment(
            "Adjustment would exceed the maximum quantity".into(),
        )),
    }
}

#[derive(Clone)]
pub struct InventoryAdjustService {
    pub repository: DynInventoryRepository,
    pub ledger: LedgerWriter,
    pub metrics: Metrics,
}

impl InventoryAdjustService {
    pub fn new(repository: DynInventoryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "inventory_adjust_service");

        Self {
            repository,
            ledger: LedgerWriter::new(),
            metrics,
        }
    }

    /// Read, validate, write and record inside one unit of work. Any early
    /// return drops the unit of work, which discards its writes.
    async fn apply(&self, req: &AdjustProductRequest) -> Result<ProductModel, ServiceError> {
        let mut uow = self.repository.begin().await?;

        let mut product = uow.lock_product(req.product_id).await?.ok_or_else(|| {
            ServiceError::NotFound(format!("Product with ID {} not found", req.product_id))
        })?;

        let previous = product.quantity;
        let next = next_quantity(previous, req.quantity).inspect_err(|_| {
            warn!(
                "⚠️ Rejected adjustment of {} on product {} holding {}",
                req.quantity, product.id, previous
            );
        })?;

        product.quantity = next;
        let product = uow.save_product(&product).await?;

        let entry = LedgerEntry {
            transaction_type: TransactionType::Adjustment,
            quantity: req.quantity,
            previous_quantity: previous,
            new_quantity: product.quantity,
            notes: req.notes.clone(),
            user_id: req.user_id,
            product_id: product.id,
        };

        self.ledger
            .append(&mut *uow, entry)
            .await
            .map_err(|e| match e {
                ServiceError::Repo(RepositoryError::ForeignKey(_)) => {
                    ServiceError::NotFound(format!("User with ID {} not found", req.user_id))
                }
                other => other,
            })?;

        uow.commit().await?;

        Ok(product)
    }
}

#[async_trait]
impl InventoryAdjustServiceTrait for InventoryAdjustService {
    async fn adjust(
        &self,
        req: &AdjustProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("adjust_product");
        info!(
            "📦 Adjusting product {} by {} for user {}",
            req.product_id, req.quantity, req.user_id
        );

        match self.apply(req).await {
            Ok(product) => {
                tracing_ctx.complete_success(
                    &self.metrics,
                    Method::Put,
                    &format!("Product {} now holds {}", product.id, product.quantity),
                );
                Ok(ApiResponse::success("Product adjusted successfully", product.into()))
            }
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, Method::Put, &e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            product::repository::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
            transaction::TransactionQueryRepositoryTrait,
            user::repository::UserCommandRepositoryTrait,
        },
        domain::requests::user::CreateUserRequest,
        model::product::NewProduct,
        repository::memory::{
            InMemoryInventoryRepository, InMemoryProductRepository, InMemoryStore,
            InMemoryTransactionRepository, InMemoryUserRepository,
        },
    };
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use uuid::Uuid;

    struct Fixture {
        store: InMemoryStore,
        service: InventoryAdjustService,
        product_id: Uuid,
        user_id: Uuid,
    }

    async fn fixture(quantity: i32) -> Fixture {
        let store = InMemoryStore::new();
        let user = InMemoryUserRepository::new(store.clone())
            .create_user(&CreateUserRequest {
                email: "stock@example.com".into(),
                name: "Stock Clerk".into(),
                phone: None,
            })
            .await
            .unwrap();
        let product = InMemoryProductRepository::new(store.clone())
            .create_product(&NewProduct {
                name: "Pallet".into(),
                description: None,
                price: Decimal::new(1250, 2),
                quantity,
                status: "active".into(),
            })
            .await
            .unwrap();
        let service = InventoryAdjustService::new(
            Arc::new(InMemoryInventoryRepository::new(store.clone())),
            &mut Registry::default(),
        );

        Fixture {
            store,
            service,
            product_id: product.id,
            user_id: user.id,
        }
    }

    fn adjust(f: &Fixture, delta: i32) -> AdjustProductRequest {
        AdjustProductRequest {
            product_id: f.product_id,
            quantity: delta,
            user_id: f.user_id,
            notes: None,
        }
    }

    async fn stored_quantity(f: &Fixture) -> i32 {
        InMemoryProductRepository::new(f.store.clone())
            .find_by_id(f.product_id)
            .await
            .unwrap()
            .unwrap()
            .quantity
    }

    async fn ledger_len(f: &Fixture) -> usize {
        InMemoryTransactionRepository::new(f.store.clone())
            .find_by_product(f.product_id)
            .await
            .unwrap()
            .len()
    }

    #[rstest]
    #[case(0, 10)]
    #[case(-10, 0)]
    #[case(5, 15)]
    #[tokio::test]
    async fn accepted_adjustments_record_one_entry(#[case] delta: i32, #[case] expected: i32) {
        let f = fixture(10).await;

        let response = f.service.adjust(&adjust(&f, delta)).await.unwrap();

        assert_eq!(response.data.quantity, expected);
        assert_eq!(stored_quantity(&f).await, expected);

        let ledger = InMemoryTransactionRepository::new(f.store.clone())
            .find_by_product(f.product_id)
            .await
            .unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].quantity, delta);
        assert_eq!(ledger[0].previous_quantity, 10);
        assert_eq!(ledger[0].new_quantity, expected);
        assert_eq!(ledger[0].transaction_type, TransactionType::Adjustment);
    }

    #[tokio::test]
    async fn negative_result_is_rejected_without_side_effects() {
        let f = fixture(10).await;

        let err = f.service.adjust(&adjust(&f, -11)).await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidAdjustment(ref m) if m == NEGATIVE_QUANTITY));
        assert_eq!(stored_quantity(&f).await, 10);
        assert_eq!(ledger_len(&f).await, 0);
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let f = fixture(10).await;
        let mut req = adjust(&f, 1);
        req.product_id = Uuid::now_v7();

        let err = f.service.adjust(&req).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(ledger_len(&f).await, 0);
    }

    #[tokio::test]
    async fn unknown_user_rolls_back_the_product_write() {
        let f = fixture(10).await;
        let mut req = adjust(&f, 4);
        req.user_id = Uuid::now_v7();

        let err = f.service.adjust(&req).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(ref m) if m.starts_with("User with ID")));
        assert_eq!(stored_quantity(&f).await, 10);
        assert_eq!(ledger_len(&f).await, 0);
    }

    #[tokio::test]
    async fn failed_ledger_append_rolls_back_the_product_write() {
        let f = fixture(10).await;
        f.store.toggle_ledger_offline();

        let err = f.service.adjust(&adjust(&f, 4)).await.unwrap_err();

        assert!(matches!(err, ServiceError::Repo(RepositoryError::Custom(_))));
        assert_eq!(stored_quantity(&f).await, 10);
        assert_eq!(ledger_len(&f).await, 0);

        f.store.toggle_ledger_offline();
        f.service.adjust(&adjust(&f, 4)).await.unwrap();
        assert_eq!(stored_quantity(&f).await, 14);
    }

    #[tokio::test]
    async fn notes_are_stored_as_given() {
        let f = fixture(10).await;

        let mut with_note = adjust(&f, 1);
        with_note.notes = Some("Cycle count".into());
        let mut empty_note = adjust(&f, 1);
        empty_note.notes = Some(String::new());

        f.service.adjust(&with_note).await.unwrap();
        f.service.adjust(&empty_note).await.unwrap();
        f.service.adjust(&adjust(&f, 1)).await.unwrap();

        let notes: Vec<Option<String>> = InMemoryTransactionRepository::new(f.store.clone())
            .find_by_product(f.product_id)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.notes)
            .collect();

        assert_eq!(notes, vec![None, Some(String::new()), Some("Cycle count".into())]);
    }

    #[rstest]
    #[case(0, -1)]
    #[case(i32::MAX, 1)]
    #[case(0, i32::MIN)]
    fn out_of_range_results_are_invalid(#[case] previous: i32, #[case] delta: i32) {
        assert!(matches!(
            next_quantity(previous, delta),
            Err(ServiceError::InvalidAdjustment(_))
        ));
    }

    proptest! {
        #[test]
        fn next_quantity_is_exact_or_rejected(previous in 0..=i32::MAX, delta in any::<i32>()) {
            let sum = i64::from(previous) + i64::from(delta);

            match next_quantity(previous, delta) {
                Ok(next) => {
                    prop_assert!(next >= 0);
                    prop_assert_eq!(i64::from(next), sum);
                }
                Err(_) => prop_assert!(sum < 0 || sum > i64::from(i32::MAX)),
            }
        }
    }
}
