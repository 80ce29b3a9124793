use crate::{
    model::Ship,
    store::{ShipStore, StoreError},
    types::ShipId,
};
use std::{
    collections::BTreeMap,
    sync::Mutex,
};

///
/// MemoryStore
///
/// Reference store: a mutexed ordered map plus a monotonic id counter.
/// `save` with no id assigns the next one; `save` with an id replaces that
/// row. Explicitly seeded ids advance the counter past themselves so later
/// assignments stay unique.
///

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    rows: BTreeMap<ShipId, Ship>,
    next_id: ShipId,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: ShipId::FIRST,
        }
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.rows.is_empty())
    }

    /// Drop every row and reset id assignment.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.rows.clear();
        inner.next_id = ShipId::FIRST;

        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::unavailable("store mutex poisoned"))
    }
}

impl ShipStore for MemoryStore {
    fn fetch_all(&self) -> Result<Vec<Ship>, StoreError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    fn find(&self, id: ShipId) -> Result<Option<Ship>, StoreError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    fn save(&self, mut ship: Ship) -> Result<Ship, StoreError> {
        let mut inner = self.lock()?;

        let id = match ship.id {
            Some(id) => id,
            None => {
                let id = inner.next_id;
                ship.id = Some(id);
                id
            }
        };
        if id >= inner.next_id {
            inner.next_id = id.next();
        }
        inner.rows.insert(id, ship.clone());

        Ok(ship)
    }

    fn delete(&self, id: ShipId) -> Result<(), StoreError> {
        self.lock()?.rows.remove(&id);

        Ok(())
    }
}

///
/// TESTS
///
