use crate::{
    abstract_trait::{
        inventory::{DynInventoryAdjustService, DynInventoryRepository},
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::{DynProductCommandService, DynProductQueryService},
        },
        transaction::{DynTransactionQueryRepository, DynTransactionQueryService},
        user::{
            repository::{DynUserCommandRepository, DynUserQueryRepository},
            service::{DynUserCommandService, DynUserQueryService},
        },
    },
    repository::{
        inventory::InventoryRepository,
        memory::{
            InMemoryInventoryRepository, InMemoryProductRepository, InMemoryStore,
            InMemoryTransactionRepository, InMemoryUserRepository,
        },
        product::{ProductCommandRepository, ProductQueryRepository},
        transaction::TransactionQueryRepository,
        user::{UserCommandRepository, UserQueryRepository},
    },
    service::{
        inventory::InventoryAdjustService,
        product::{ProductCommandService, ProductQueryService},
        transaction::TransactionQueryService,
        user::{UserCommandService, UserQueryService},
    },
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub user_command: DynUserCommandService,
    pub user_query: DynUserQueryService,
    pub product_command: DynProductCommandService,
    pub product_query: DynProductQueryService,
    pub inventory_adjust: DynInventoryAdjustService,
    pub transaction_query: DynTransactionQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("user_command", &"UserCommandService")
            .field("user_query", &"UserQueryService")
            .field("product_command", &"ProductCommandService")
            .field("product_query", &"ProductQueryService")
            .field("inventory_adjust", &"InventoryAdjustService")
            .field("transaction_query", &"TransactionQueryService")
            .finish()
    }
}

#[derive(Clone)]
pub enum StoreDeps {
    Postgres(ConnectionPool),
    Memory(InMemoryStore),
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub store: StoreDeps,
}

struct Repositories {
    user_command: DynUserCommandRepository,
    user_query: DynUserQueryRepository,
    product_command: DynProductCommandRepository,
    product_query: DynProductQueryRepository,
    inventory: DynInventoryRepository,
    transaction_query: DynTransactionQueryRepository,
}

impl Repositories {
    fn postgres(pool: ConnectionPool) -> Self {
        Self {
            user_command: Arc::new(UserCommandRepository::new(pool.clone())),
            user_query: Arc::new(UserQueryRepository::new(pool.clone())),
            product_command: Arc::new(ProductCommandRepository::new(pool.clone())),
            product_query: Arc::new(ProductQueryRepository::new(pool.clone())),
            inventory: Arc::new(InventoryRepository::new(pool.clone())),
            transaction_query: Arc::new(TransactionQueryRepository::new(pool)),
        }
    }

    fn memory(store: InMemoryStore) -> Self {
        let users = Arc::new(InMemoryUserRepository::new(store.clone()));
        let products = Arc::new(InMemoryProductRepository::new(store.clone()));

        Self {
            user_command: users.clone(),
            user_query: users,
            product_command: products.clone(),
            product_query: products,
            inventory: Arc::new(InMemoryInventoryRepository::new(store.clone())),
            transaction_query: Arc::new(InMemoryTransactionRepository::new(store)),
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let repos = match deps.store {
            StoreDeps::Postgres(pool) => Repositories::postgres(pool),
            StoreDeps::Memory(store) => Repositories::memory(store),
        };

        let user_command = Arc::new(UserCommandService::new(
            repos.user_command,
            repos.user_query.clone(),
            registry,
        ));
        let user_query = Arc::new(UserQueryService::new(repos.user_query, registry));
        let product_command = Arc::new(ProductCommandService::new(repos.product_command, registry));
        let product_query = Arc::new(ProductQueryService::new(repos.product_query, registry));
        let inventory_adjust = Arc::new(InventoryAdjustService::new(repos.inventory, registry));
        let transaction_query = Arc::new(TransactionQueryService::new(
            repos.transaction_query,
            registry,
        ));

        Self {
            user_command,
            user_query,
            product_command,
            product_query,
            inventory_adjust,
            transaction_query,
        }
    }
}
