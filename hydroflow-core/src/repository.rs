use async_trait::async_trait;

use crate::records::{Attendant, Client, Vehicle};

/// Error type shared by all repository traits.
pub type RepoError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for client records.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn create(&self, client: &Client) -> Result<(), RepoError>;

    async fn get(&self, document: &str) -> Result<Option<Client>, RepoError>;

    async fn list(&self) -> Result<Vec<Client>, RepoError>;

    /// Returns false when no record with the client's document exists.
    async fn update(&self, client: &Client) -> Result<bool, RepoError>;

    async fn delete(&self, document: &str) -> Result<bool, RepoError>;
}

/// Repository trait for vehicle records.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn create(&self, vehicle: &Vehicle) -> Result<(), RepoError>;

    async fn get(&self, plate: &str) -> Result<Option<Vehicle>, RepoError>;

    async fn list(&self) -> Result<Vec<Vehicle>, RepoError>;

    async fn update(&self, vehicle: &Vehicle) -> Result<bool, RepoError>;

    async fn delete(&self, plate: &str) -> Result<bool, RepoError>;
}

/// Repository trait for attendant records.
#[async_trait]
pub trait AttendantRepository: Send + Sync {
    async fn create(&self, attendant: &Attendant) -> Result<(), RepoError>;

    async fn get(&self, cpf: &str) -> Result<Option<Attendant>, RepoError>;

    async fn count(&self) -> Result<i64, RepoError>;
}
