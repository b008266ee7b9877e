mod repository;
mod service;

pub use self::repository::{
    DynInventoryRepository, DynInventoryUnitOfWork, InventoryRepositoryTrait,
    InventoryUnitOfWorkTrait,
};
pub use self::service::{DynInventoryAdjustService, InventoryAdjustServiceTrait};
