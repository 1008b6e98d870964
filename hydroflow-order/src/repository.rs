use async_trait::async_trait;
use chrono::NaiveDate;
use hydroflow_core::repository::RepoError;
use uuid::Uuid;

use crate::models::Order;

/// Repository trait for order data access.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create_order(&self, order: &Order) -> Result<(), RepoError>;

    async fn get_order(&self, id: Uuid) -> Result<Option<Order>, RepoError>;

    async fn list_orders(&self) -> Result<Vec<Order>, RepoError>;

    /// All orders created on one UTC calendar day.
    async fn list_orders_for_day(&self, date: NaiveDate) -> Result<Vec<Order>, RepoError>;

    /// Persist the current state of an existing order, items included.
    async fn save_order(&self, order: &Order) -> Result<(), RepoError>;

    /// Hard delete. Returns false when the order does not exist.
    async fn delete_order(&self, id: Uuid) -> Result<bool, RepoError>;
}
