use serde::{Deserialize, Serialize};

use crate::domain::VehicleType;

/// A client of the wash, keyed by CPF/CNPJ document number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub document: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub observations: Option<String>,
}

/// A registered vehicle, keyed by plate. The type decides the price tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub plate: String,
    pub vehicle_type: VehicleType,
    pub client_document: String,
}

/// An attendant who can log in and register orders.
///
/// The credential fields never leave the process; they are skipped on the
/// wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendant {
    pub cpf: String,
    pub name: String,
    #[serde(skip)]
    pub password_hash: Vec<u8>,
    #[serde(skip)]
    pub password_salt: Vec<u8>,
}
