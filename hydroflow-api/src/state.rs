use std::sync::Arc;

use hydroflow_catalog::ServiceRepository;
use hydroflow_core::repository::{AttendantRepository, ClientRepository, VehicleRepository};
use hydroflow_order::{OrderLockMap, OrderRepository};
use hydroflow_store::{
    DbClient, StoreAttendantRepository, StoreClientRepository, StoreOrderRepository,
    StoreServiceRepository, StoreVehicleRepository,
};

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn ClientRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub attendants: Arc<dyn AttendantRepository>,
    pub services: Arc<dyn ServiceRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub order_locks: Arc<OrderLockMap>,
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(db: &DbClient, auth: AuthConfig) -> Self {
        Self {
            clients: Arc::new(StoreClientRepository::new(db.pool.clone())),
            vehicles: Arc::new(StoreVehicleRepository::new(db.pool.clone())),
            attendants: Arc::new(StoreAttendantRepository::new(db.pool.clone())),
            services: Arc::new(StoreServiceRepository::new(db.pool.clone())),
            orders: Arc::new(StoreOrderRepository::new(db.pool.clone())),
            order_locks: Arc::new(OrderLockMap::new()),
            auth,
        }
    }
}
