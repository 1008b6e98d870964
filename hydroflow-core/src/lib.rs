pub mod domain;
pub mod money;
pub mod records;
pub mod repository;

pub use domain::{OrderStatus, PaymentMethod, VehicleType};
pub use records::{Attendant, Client, Vehicle};
