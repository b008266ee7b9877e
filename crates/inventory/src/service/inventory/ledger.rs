use crate::{
    abstract_trait::inventory::InventoryUnitOfWorkTrait,
    model::transaction::{Transaction as TransactionModel, TransactionType},
};
use chrono::Utc;
use shared::errors::ServiceError;
use tracing::{error, info};
use uuid::Uuid;

/// A ledger row before the writer stamps it.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub transaction_type: TransactionType,
    pub quantity: i32,
    pub previous_quantity: i32,
    pub new_quantity: i32,
    pub notes: Option<String>,
    pub user_id: Uuid,
    pub product_id: Uuid,
}

/// Append-only writer for the stock ledger. It has no update or delete path.
#[derive(Debug, Clone, Default)]
pub struct LedgerWriter;

impl LedgerWriter {
    pub fn new() -> Self {
        Self
    }

    /// Assigns id and creation time, then appends through the caller's unit
    /// of work so the row commits together with the product write.
    pub async fn append(
        &self,
        uow: &mut (dyn InventoryUnitOfWorkTrait + Send),
        entry: LedgerEntry,
    ) -> Result<TransactionModel, ServiceError> {
        if entry.previous_quantity.checked_add(entry.quantity) != Some(entry.new_quantity) {
            error!(
                "❌ Ledger entry snapshots do not add up: {} + {} != {}",
                entry.previous_quantity, entry.quantity, entry.new_quantity
            );
            return Err(ServiceError::Internal(
                "Ledger entry snapshots are inconsistent".into(),
            ));
        }

        let record = TransactionModel {
            id: Uuid::now_v7(),
            transaction_type: entry.transaction_type,
            quantity: entry.quantity,
            previous_quantity: entry.previous_quantity,
            new_quantity: entry.new_quantity,
            notes: entry.notes,
            created_at: Utc::now(),
            user_id: entry.user_id,
            product_id: entry.product_id,
        };

        let stored = uow.append_transaction(&record).await?;

        info!(
            "🧾 Ledger entry {} staged for product {}: {} -> {}",
            stored.id, stored.product_id, stored.previous_quantity, stored.new_quantity
        );

        Ok(stored)
    }
}
