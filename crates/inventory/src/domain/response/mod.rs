pub mod api;
pub mod product;
pub mod status;
pub mod transaction;
pub mod user;
