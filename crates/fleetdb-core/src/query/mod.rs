//! Query primitives: filter criteria, sort keys, page windows, and the
//! envelope combining them. Execution order is fixed (filter, then sort,
//! then page) and lives in the service layer.

mod filter;
mod page;
mod sort;

pub use filter::ShipFilter;
pub use page::{PageError, PageSpec};
pub use sort::{SortKey, sort};

use serde::{Deserialize, Serialize};

///
/// ShipQuery
///
/// One read request: criteria, optional ordering, and a page window.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ShipQuery {
    pub filter: ShipFilter,
    pub sort: Option<SortKey>,
    pub page: PageSpec,
}

impl ShipQuery {
    /// Construct a query matching everything, unordered, first default page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// CONSTRUCTORS
    ///

    #[must_use]
    pub fn filter(mut self, filter: ShipFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub const fn sort(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    #[must_use]
    pub const fn page(mut self, page: PageSpec) -> Self {
        self.page = page;
        self
    }
}

///
/// TESTS
///
