mod repository;
mod service;

pub use self::repository::{DynTransactionQueryRepository, TransactionQueryRepositoryTrait};
pub use self::service::{DynTransactionQueryService, TransactionQueryServiceTrait};
