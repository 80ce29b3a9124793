use crate::error::Error;
use fleetdb_core::{
    model::{Ship, ShipInput},
    query::{PageSpec, ShipFilter, ShipQuery, SortKey},
    service::ShipService,
    store::MemoryStore,
};

///
/// Db
///
/// The bundled runtime: the ship service over the reference in-memory
/// store, speaking the public error taxonomy. Transport adapters hand raw
/// boundary values (ids, page numbers) straight in.
///

#[derive(Debug)]
pub struct Db {
    service: ShipService<MemoryStore>,
}

impl Default for Db {
    fn default() -> Self {
        Self::new()
    }
}

impl Db {
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: ShipService::new(MemoryStore::new()),
        }
    }

    /// One page of matching records; absent page values fall back to the
    /// defaults, negative ones are rejected.
    pub fn list(
        &self,
        filter: ShipFilter,
        sort: Option<SortKey>,
        page_number: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Vec<Ship>, Error> {
        let page = PageSpec::from_raw(page_number, page_size)?;
        let mut query = ShipQuery::new().filter(filter).page(page);
        if let Some(key) = sort {
            query = query.sort(key);
        }

        Ok(self.service.list(&query)?)
    }

    /// How many records match the criteria.
    pub fn count(&self, filter: &ShipFilter) -> Result<usize, Error> {
        Ok(self.service.count(filter)?)
    }

    /// Validate, rate, and persist a new record.
    pub fn create(&self, input: &ShipInput) -> Result<Ship, Error> {
        Ok(self.service.create(input)?)
    }

    /// Look up one record by raw id.
    pub fn get(&self, id: i64) -> Result<Ship, Error> {
        Ok(self.service.get(id)?)
    }

    /// Apply supplied fields to an existing record.
    pub fn edit(&self, id: i64, input: &ShipInput) -> Result<Ship, Error> {
        Ok(self.service.edit(id, input)?)
    }

    /// Remove an existing record.
    pub fn delete(&self, id: i64) -> Result<(), Error> {
        Ok(self.service.delete(id)?)
    }
}

///
/// TESTS
///
