use crate::model::ProductId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// One async lock per product id.
///
/// Entries are dropped once nobody holds or waits on them, so the map only
/// grows with the number of rows being mutated right now.
#[derive(Clone, Default)]
pub struct RowLocks {
    rows: Arc<Mutex<HashMap<ProductId, Weak<AsyncMutex<()>>>>>,
}

impl RowLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other mutation of `id` is running.
    pub async fn lock(&self, id: &ProductId) -> OwnedMutexGuard<()> {
        let row = {
            let mut rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
            rows.retain(|_, row| row.strong_count() > 0);
            match rows.get(id).and_then(Weak::upgrade) {
                Some(row) => row,
                None => {
                    let row = Arc::new(AsyncMutex::new(()));
                    rows.insert(id.clone(), Arc::downgrade(&row));
                    row
                }
            }
        };
        row.lock_owned().await
    }

    /// Number of ids currently locked or awaited.
    pub fn active(&self) -> usize {
        let rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
        rows.values().filter(|row| row.strong_count() > 0).count()
    }
}
