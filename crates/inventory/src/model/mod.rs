pub mod product;
pub mod transaction;
pub mod user;
