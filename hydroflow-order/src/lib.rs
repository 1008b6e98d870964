pub mod lifecycle;
pub mod locks;
pub mod models;
pub mod repository;
pub mod summary;

pub use lifecycle::OrderError;
pub use locks::OrderLockMap;
pub use models::{Order, OrderItem};
pub use repository::OrderRepository;
pub use summary::{summarize, CashSummary};
