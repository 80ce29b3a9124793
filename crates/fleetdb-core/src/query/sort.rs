use crate::model::Ship;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// SortKey
///
/// The selectable orderings, each an explicit comparator. Sorting is always
/// ascending in the key's natural numeric/temporal order.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortKey {
    Id,
    Speed,
    Date,
    Rating,
}

impl SortKey {
    /// Compare two records under this key.
    ///
    /// Float keys use total ordering; validated records never carry NaN, so
    /// this coincides with the usual `<` on the values the engine sees.
    #[must_use]
    pub fn compare(self, a: &Ship, b: &Ship) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Speed => a.speed.total_cmp(&b.speed),
            Self::Date => a.prod_date.cmp(&b.prod_date),
            Self::Rating => a.rating.total_cmp(&b.rating),
        }
    }
}

/// Order a working sequence by the given key, ascending. An absent key
/// returns the sequence untouched. The sort is stable: records comparing
/// equal keep their relative input order.
#[must_use]
pub fn sort(mut ships: Vec<Ship>, key: Option<SortKey>) -> Vec<Ship> {
    if let Some(key) = key {
        ships.sort_by(|a, b| key.compare(a, b));
    }

    ships
}

///
/// TESTS
///
