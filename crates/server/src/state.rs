use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::customers::{CustomerRepository, SeaOrmCustomerRepository};
use service::orders::{OrderRepository, SeaOrmOrderRepository};
use service::service_types::{SeaOrmServiceTypeRepository, ServiceTypeRepository};
use service::users::{SeaOrmUserRepository, UserRepository};

/// Repositories shared by all handlers.
#[derive(Clone)]
pub struct ServerState {
    pub customers: Arc<dyn CustomerRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub service_types: Arc<dyn ServiceTypeRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl ServerState {
    /// SeaORM-backed repositories over one connection pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self {
            customers: Arc::new(SeaOrmCustomerRepository::new(db.clone())),
            orders: Arc::new(SeaOrmOrderRepository::new(db.clone())),
            service_types: Arc::new(SeaOrmServiceTypeRepository::new(db.clone())),
            users: Arc::new(SeaOrmUserRepository::new(db)),
        }
    }
}
