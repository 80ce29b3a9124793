//! Core engine for FleetDB: the ship record model, field validation,
//! rating derivation, the filter/sort/page query primitives, store
//! contracts, and the service orchestrating them.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod model;
pub mod obs;
pub mod query;
pub mod rating;
pub mod service;
pub mod store;
pub mod types;
pub mod validate;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{Ship, ShipClass, ShipInput},
        query::{PageSpec, ShipFilter, ShipQuery, SortKey},
        types::{Date, ShipId},
    };
}
