//! Module: service
//! Responsibility: orchestration of the read pipeline (filter, sort, page)
//! and the write workflows (validate, rate, persist).
//! Does not own: storage, wire formats, or transport concerns.
//! Boundary: the operations a routing layer calls into.


use crate::{
    model::{Ship, ShipInput},
    obs::{self, ExecKind, MetricsEvent},
    query::{ShipFilter, ShipQuery, sort},
    store::{ShipStore, StoreError},
    types::{BadId, ShipId},
    validate::{self, RuleViolation},
};
use thiserror::Error as ThisError;

///
/// ShipService
///
/// The query/write engine over an injected store. Holds no mutable state
/// of its own; every operation is a pure pipeline or a single
/// read-then-write against the store.
///

#[derive(Debug)]
pub struct ShipService<S> {
    store: S,
}

impl<S> ShipService<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ShipStore> ShipService<S> {
    /// One page of matching records: filter, then sort, then page.
    /// Sorting before paging is load-bearing; the page window selects out
    /// of the fully ordered match set.
    pub fn list(&self, query: &ShipQuery) -> Result<Vec<Ship>, ServiceError> {
        obs::record(MetricsEvent::ExecStart {
            kind: ExecKind::List,
        });

        let all = self.store.fetch_all()?;
        obs::record(MetricsEvent::RowsScanned {
            rows_scanned: all.len() as u64,
        });

        let matched = query.filter.apply(all);
        let ordered = sort(matched, query.sort);
        let page = query.page.slice(ordered);

        obs::record(MetricsEvent::ExecFinish {
            kind: ExecKind::List,
            rows_returned: page.len() as u64,
        });

        Ok(page)
    }

    /// How many records match the criteria. Ordering and paging do not
    /// apply here.
    pub fn count(&self, filter: &ShipFilter) -> Result<usize, ServiceError> {
        obs::record(MetricsEvent::ExecStart {
            kind: ExecKind::Count,
        });

        let all = self.store.fetch_all()?;
        obs::record(MetricsEvent::RowsScanned {
            rows_scanned: all.len() as u64,
        });

        let matched = all.iter().filter(|ship| filter.matches(ship)).count();

        obs::record(MetricsEvent::ExecFinish {
            kind: ExecKind::Count,
            rows_returned: matched as u64,
        });

        Ok(matched)
    }

    /// Validate a candidate, derive its rating, and persist it. The store
    /// assigns the id; the stored form is returned.
    pub fn create(&self, input: &ShipInput) -> Result<Ship, ServiceError> {
        obs::record(MetricsEvent::ExecStart {
            kind: ExecKind::Create,
        });

        let mut ship = validate::for_create(input)?;
        ship.recompute_rating();
        let stored = self.store.save(ship)?;

        obs::record(MetricsEvent::ExecFinish {
            kind: ExecKind::Create,
            rows_returned: 1,
        });

        Ok(stored)
    }

    /// Look up one record. A non-positive id is malformed (`BadId`); a
    /// well-formed id with no record is `NotFound`.
    pub fn get(&self, raw_id: i64) -> Result<Ship, ServiceError> {
        obs::record(MetricsEvent::ExecStart {
            kind: ExecKind::Get,
        });

        let (_, ship) = self.resolve(raw_id)?;

        obs::record(MetricsEvent::ExecFinish {
            kind: ExecKind::Get,
            rows_returned: 1,
        });

        Ok(ship)
    }

    /// Apply supplied fields to an existing record. Every supplied field
    /// is validated before anything is mutated; a violation aborts the
    /// whole edit. The rating is recomputed unconditionally.
    pub fn edit(&self, raw_id: i64, input: &ShipInput) -> Result<Ship, ServiceError> {
        obs::record(MetricsEvent::ExecStart {
            kind: ExecKind::Edit,
        });

        let (_, mut ship) = self.resolve(raw_id)?;
        validate::supplied(input)?;
        input.apply_to(&mut ship);
        ship.recompute_rating();
        let stored = self.store.save(ship)?;

        obs::record(MetricsEvent::ExecFinish {
            kind: ExecKind::Edit,
            rows_returned: 1,
        });

        Ok(stored)
    }

    /// Remove an existing record, resolving its existence first.
    pub fn delete(&self, raw_id: i64) -> Result<(), ServiceError> {
        obs::record(MetricsEvent::ExecStart {
            kind: ExecKind::Delete,
        });

        let (id, _) = self.resolve(raw_id)?;
        self.store.delete(id)?;

        obs::record(MetricsEvent::ExecFinish {
            kind: ExecKind::Delete,
            rows_returned: 1,
        });

        Ok(())
    }

    fn resolve(&self, raw_id: i64) -> Result<(ShipId, Ship), ServiceError> {
        let id = ShipId::from_raw(raw_id)?;
        let ship = self
            .store
            .find(id)?
            .ok_or(ServiceError::NotFound { id })?;

        Ok((id, ship))
    }
}

///
/// ServiceError
///
/// The engine's error taxonomy. Validation and lookup failures are typed;
/// store failures pass through unchanged.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum ServiceError {
    #[error("invalid ship input: {0}")]
    InvalidInput(#[from] RuleViolation),

    #[error("ship {id} not found")]
    NotFound { id: ShipId },

    #[error(transparent)]
    BadId(#[from] BadId),

    #[error(transparent)]
    Store(#[from] StoreError),
}
