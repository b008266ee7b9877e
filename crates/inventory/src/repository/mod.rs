pub mod inventory;
pub mod memory;
pub mod product;
pub mod transaction;
pub mod user;
