//! FleetDB: a typed query engine and registry runtime for starship fleet
//! records.
//!
//! The core crate owns the engine; this facade re-exports the domain
//! vocabulary, maps core errors onto the stable public taxonomy, and
//! bundles the service with the reference in-memory store as [`Db`].

mod db;
mod error;

pub use db::Db;
pub use error::{Error, ErrorKind, ErrorOrigin};

pub use fleetdb_core::{
    model::{Ship, ShipClass, ShipInput},
    obs::{MetricsState, metrics_report, metrics_reset_all},
    query::{PageError, PageSpec, ShipFilter, ShipQuery, SortKey},
    rating::rating,
    service::{ServiceError, ShipService},
    store::{MemoryStore, ShipStore, StoreError},
    types::{BadId, Date, ShipId},
    validate::RuleViolation,
};
