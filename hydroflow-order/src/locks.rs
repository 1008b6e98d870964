use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

/// Per-order serialization point.
///
/// Every read-modify-write on an order takes its lock first, so two
/// concurrent edits of the same order cannot interleave a partial
/// line-item write. Different orders proceed in parallel.
#[derive(Debug, Default)]
pub struct OrderLockMap {
    locks: Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>,
}

impl OrderLockMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for one order, creating it on first use.
    pub async fn lock(&self, id: Uuid) -> OwnedMutexGuard<()> {
        let cell = {
            let mut map = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(map.entry(id).or_default())
        };
        cell.lock_owned().await
    }

    /// Drop the entry for a deleted order.
    pub fn remove(&self, id: Uuid) {
        let mut map = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        map.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_order_is_mutually_exclusive() {
        let locks = Arc::new(OrderLockMap::new());
        let id = Uuid::new_v4();

        let guard = locks.lock(id).await;

        let contender = {
            let locks = Arc::clone(&locks);
            tokio::spawn(async move {
                let _guard = locks.lock(id).await;
            })
        };

        // The contender cannot finish while the first guard is held.
        tokio::task::yield_now().await;
        assert!(!contender.is_finished());

        drop(guard);
        contender.await.unwrap();
    }

    #[tokio::test]
    async fn different_orders_do_not_block_each_other() {
        let locks = OrderLockMap::new();
        let _a = locks.lock(Uuid::new_v4()).await;
        let _b = locks.lock(Uuid::new_v4()).await;
    }

    #[tokio::test]
    async fn lock_can_be_reacquired_after_release() {
        let locks = OrderLockMap::new();
        let id = Uuid::new_v4();
        drop(locks.lock(id).await);
        drop(locks.lock(id).await);
        locks.remove(id);
        drop(locks.lock(id).await);
    }
}
