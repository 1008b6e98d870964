pub mod app_config;
pub mod attendant_repo;
pub mod client_repo;
pub mod database;
pub mod order_repo;
pub mod service_repo;
pub mod vehicle_repo;

pub use attendant_repo::StoreAttendantRepository;
pub use client_repo::StoreClientRepository;
pub use database::DbClient;
pub use order_repo::StoreOrderRepository;
pub use service_repo::StoreServiceRepository;
pub use vehicle_repo::StoreVehicleRepository;
