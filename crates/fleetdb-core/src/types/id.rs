use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ShipId
///
/// Typed primary-key wrapper for ship identities.
/// A valid id is strictly positive; zero is reserved as "never assigned".
/// Serializes identically to the underlying integer.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct ShipId(u64);

impl ShipId {
    /// Smallest id a store may assign.
    pub const FIRST: Self = Self(1);

    /// Construct from an already-assigned positive key.
    #[must_use]
    pub(crate) const fn new(key: u64) -> Self {
        Self(key)
    }

    /// Convert a boundary-supplied raw id, rejecting non-positive values.
    pub fn from_raw(raw: i64) -> Result<Self, BadId> {
        if raw <= 0 {
            return Err(BadId { raw });
        }

        Ok(Self(raw.unsigned_abs()))
    }

    /// Returns the underlying key.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id a store hands out after this one.
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

///
/// BadId
///
/// A lookup id that is malformed rather than merely unknown.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("id must be a positive integer, got {raw}")]
pub struct BadId {
    pub raw: i64,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_accepts_positive_ids() {
        let id = ShipId::from_raw(42).unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn from_raw_rejects_zero_and_negative() {
        assert_eq!(ShipId::from_raw(0), Err(BadId { raw: 0 }));
        assert_eq!(ShipId::from_raw(-1), Err(BadId { raw: -1 }));
    }

    #[test]
    fn next_increments() {
        assert_eq!(ShipId::FIRST.next().get(), 2);
    }

    #[test]
    fn display_and_parse_round_trip() {
        let id: ShipId = "7".parse().unwrap();
        assert_eq!(id, ShipId::new(7));
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn serde_passes_through_the_integer() {
        let id = ShipId::new(9);
        assert_eq!(serde_json::to_string(&id).unwrap(), "9");
    }
}
