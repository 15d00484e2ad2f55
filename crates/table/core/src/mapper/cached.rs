//! Memoizing proxy in front of an expensive table mapper.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{Result, TableError, TableMapper, TableRows};

/// Per-table cache slot. Empty until the first successful load.
type Slot = Arc<Mutex<Option<Arc<TableRows>>>>;

/// Caching wrapper around another [`TableMapper`].
///
/// The inner mapper is invoked at most once successfully per table name for
/// the lifetime of the proxy. Failed loads leave nothing behind, so the next
/// call retries. A loader that panics poisons only that attempt.
///
/// # Concurrency
///
/// The slot map lock is held only long enough to fetch or create a table's
/// slot. The slot lock is then held across check-load-store, so concurrent
/// first requests for the same table wait for a single load while requests
/// for other tables proceed independently.
pub struct CachedTableMapper<M> {
    inner: M,
    slots: Mutex<HashMap<String, Slot>>,
}

impl<M> CachedTableMapper<M> {
    pub fn new(inner: M) -> Self {
        CachedTableMapper {
            inner,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Access the inner mapper.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// True if `table_name` has been loaded successfully.
    ///
    /// Returns false while another caller is still loading it.
    pub fn is_cached(&self, table_name: &str) -> bool {
        let Ok(slots) = self.slots.lock() else {
            return false;
        };
        slots
            .get(table_name)
            .and_then(|slot| slot.try_lock().ok().map(|rows| rows.is_some()))
            .unwrap_or(false)
    }

    /// Number of tables currently held in the cache.
    pub fn cached_len(&self) -> usize {
        let Ok(slots) = self.slots.lock() else {
            return 0;
        };
        slots
            .values()
            .filter(|slot| slot.try_lock().map(|rows| rows.is_some()).unwrap_or(false))
            .count()
    }

    fn ensure_slot(&self, table_name: &str) -> Result<Slot> {
        let mut slots = self.slots.lock().map_err(|_| TableError::LockPoisoned)?;
        Ok(slots
            .entry(table_name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(None)))
            .clone())
    }

    /// Drops a slot that stayed empty, unless another caller is waiting on it.
    ///
    /// Slots are only cloned under the map lock, so the reference count cannot
    /// grow while it is held.
    fn evict_empty(&self, table_name: &str, slot: &Slot) {
        let Ok(mut slots) = self.slots.lock() else {
            return;
        };
        let unshared = Arc::strong_count(slot) == 2
            && slots.get(table_name).is_some_and(|s| Arc::ptr_eq(s, slot));
        if unshared {
            slots.remove(table_name);
        }
    }
}

impl<M: TableMapper> TableMapper for CachedTableMapper<M> {
    fn map(&self, table_name: &str) -> Result<Arc<TableRows>> {
        let slot = self.ensure_slot(table_name)?;
        // A poisoned slot still holds `None`: the panicking load never stored.
        let mut cached = slot.lock().unwrap_or_else(|poisoned| {
            slot.clear_poison();
            poisoned.into_inner()
        });

        if let Some(rows) = cached.as_ref() {
            tracing::debug!(table = table_name, "table cache hit");
            return Ok(Arc::clone(rows));
        }

        tracing::debug!(table = table_name, "table cache miss, loading");
        match self.inner.map(table_name) {
            Ok(rows) => {
                tracing::debug!(table = table_name, rows = rows.len(), "table cached");
                *cached = Some(Arc::clone(&rows));
                Ok(rows)
            }
            Err(e) => {
                tracing::warn!(table = table_name, error = %e, "table load failed, not cached");
                self.evict_empty(table_name, &slot);
                Err(e)
            }
        }
    }
}
