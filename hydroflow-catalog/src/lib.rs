pub mod pricing;
pub mod repository;
pub mod service;

pub use pricing::{LineRequest, PricedLine, PricingEngine, PricingResult};
pub use repository::ServiceRepository;
pub use service::{CatalogError, PriceLookup, Service, ServiceIndex};
