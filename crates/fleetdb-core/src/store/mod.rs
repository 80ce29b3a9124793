//! Store contracts. The engine never talks to storage directly; it sees a
//! supplier of the full collection and a sink that persists one record,
//! assigning the identifier on first save.

mod memory;

pub use memory::MemoryStore;

use crate::{
    model::Ship,
    types::ShipId,
};
use thiserror::Error as ThisError;

///
/// ShipStore
///
/// The persistence boundary. Implementations own all cross-caller
/// consistency: atomic id assignment and isolation of concurrent writes.
///

pub trait ShipStore {
    /// The full, unfiltered collection.
    fn fetch_all(&self) -> Result<Vec<Ship>, StoreError>;

    /// Look up one record by id.
    fn find(&self, id: ShipId) -> Result<Option<Ship>, StoreError>;

    /// Upsert one record and return its canonical stored form, assigning
    /// an id when the record carries none.
    fn save(&self, ship: Ship) -> Result<Ship, StoreError>;

    /// Remove one record. Removing an unknown id is a no-op; existence is
    /// resolved by the caller.
    fn delete(&self, id: ShipId) -> Result<(), StoreError>;
}

///
/// StoreError
///
/// Opaque to the engine; propagated unchanged to callers.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("store corrupt: {reason}")]
    Corrupt { reason: String },
}

impl StoreError {
    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}
