//! Process-local store behind the same repository traits as Postgres.
//! One async mutex guards all three collections, so a stock unit of work
//! holding the guard serializes every adjustment.

mod inventory;
mod product;
mod transaction;
mod user;

pub use self::inventory::{InMemoryInventoryRepository, InMemoryInventoryUnitOfWork};
pub use self::product::InMemoryProductRepository;
pub use self::transaction::InMemoryTransactionRepository;
pub use self::user::InMemoryUserRepository;

use crate::model::{
    product::Product as ProductModel, transaction::Transaction as TransactionModel,
    user::User as UserModel,
};
use chrono::Utc;
use rust_decimal::Decimal;
use shared::errors::RepositoryError;
use std::sync::Arc;
#[cfg(test)]
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryState {
    pub users: Vec<UserModel>,
    pub products: Vec<ProductModel>,
    pub transactions: Vec<TransactionModel>,
}

/// Same rules as the `products` table CHECK constraints.
fn check_product(product: &ProductModel) -> Result<(), RepositoryError> {
    if product.quantity < 0 {
        return Err(RepositoryError::Check("products_quantity_check".into()));
    }
    if product.price < Decimal::ZERO {
        return Err(RepositoryError::Check("products_price_check".into()));
    }
    Ok(())
}

impl MemoryState {
    fn upsert_product(
        &mut self,
        mut product: ProductModel,
    ) -> Result<ProductModel, RepositoryError> {
        check_product(&product)?;
        product.updated_at = Utc::now();

        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => self.products.push(product.clone()),
        }

        Ok(product)
    }

    /// Ledger rows matching `keep`, newest first. Rows are appended under the
    /// store lock, so reverse insertion order breaks timestamp ties.
    fn ledger_newest_first<F>(&self, keep: F) -> Vec<TransactionModel>
    where
        F: Fn(&TransactionModel) -> bool,
    {
        let mut rows: Vec<TransactionModel> = self
            .transactions
            .iter()
            .rev()
            .filter(|t| keep(t))
            .cloned()
            .collect();

        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<MemoryState>>,
    #[cfg(test)]
    ledger_offline: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent ledger append fail until toggled back.
    #[cfg(test)]
    pub(crate) fn toggle_ledger_offline(&self) {
        self.ledger_offline.fetch_xor(true, Ordering::SeqCst);
    }

    #[cfg(test)]
    fn ledger_is_offline(&self) -> bool {
        self.ledger_offline.load(Ordering::SeqCst)
    }
}
