use std::collections::HashMap;

use hydroflow_core::VehicleType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog entry: one wash service with a price tier per vehicle type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub price_motorcycle: Decimal,
    pub price_car_small: Decimal,
    pub price_car_large: Decimal,
    pub duration_minutes: i32,
    pub active: bool,
}

impl Service {
    /// Resolve the unit price for a vehicle type. Total over the closed
    /// enum; unknown codes were already folded to CarSmall at decode time.
    pub fn price_for(&self, vehicle: VehicleType) -> Decimal {
        match vehicle {
            VehicleType::Motorcycle => self.price_motorcycle,
            VehicleType::CarSmall => self.price_car_small,
            VehicleType::CarLarge => self.price_car_large,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("service {0} not found")]
    ServiceNotFound(i32),
}

/// Read-side contract for resolving a service's unit price.
pub trait PriceLookup {
    fn price_for(&self, service_id: i32, vehicle: VehicleType) -> Result<Decimal, CatalogError>;
}

/// In-memory snapshot of catalog rows, loaded once per pricing request so
/// the engine stays a pure function of catalog state.
#[derive(Debug, Default)]
pub struct ServiceIndex {
    services: HashMap<i32, Service>,
}

impl ServiceIndex {
    pub fn new(services: impl IntoIterator<Item = Service>) -> Self {
        Self {
            services: services.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    pub fn get(&self, id: i32) -> Option<&Service> {
        self.services.get(&id)
    }
}

impl PriceLookup for ServiceIndex {
    fn price_for(&self, service_id: i32, vehicle: VehicleType) -> Result<Decimal, CatalogError> {
        self.services
            .get(&service_id)
            .map(|s| s.price_for(vehicle))
            .ok_or(CatalogError::ServiceNotFound(service_id))
    }
}
