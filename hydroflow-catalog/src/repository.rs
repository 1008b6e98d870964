use async_trait::async_trait;
use hydroflow_core::repository::RepoError;

use crate::service::Service;

/// Repository trait for the service catalog.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Persist a new service and return its assigned id.
    async fn create(&self, service: &Service) -> Result<i32, RepoError>;

    async fn get(&self, id: i32) -> Result<Option<Service>, RepoError>;

    async fn list(&self) -> Result<Vec<Service>, RepoError>;

    async fn update(&self, service: &Service) -> Result<bool, RepoError>;

    async fn delete(&self, id: i32) -> Result<bool, RepoError>;
}
