mod query;

pub use self::query::TransactionQueryRepository;
