use crate::model::Ship;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// PageSpec
///
/// Zero-based offset/size page window. Boundary input arrives as raw
/// integers; negative values are rejected rather than producing an invalid
/// slice range.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageSpec {
    pub number: u32,
    pub size: u32,
}

impl PageSpec {
    pub const DEFAULT_NUMBER: u32 = 0;
    pub const DEFAULT_SIZE: u32 = 3;

    #[must_use]
    pub const fn new(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    /// Build a page window from raw boundary values, applying the defaults
    /// for absent ones and rejecting negatives.
    pub fn from_raw(number: Option<i64>, size: Option<i64>) -> Result<Self, PageError> {
        let convert = |raw: Option<i64>, default: u32| match raw {
            None => Ok(default),
            Some(n) if n < 0 => Err(PageError::Negative { raw: n }),
            Some(n) => u32::try_from(n).map_err(|_| PageError::OutOfRange { raw: n }),
        };

        Ok(Self {
            number: convert(number, Self::DEFAULT_NUMBER)?,
            size: convert(size, Self::DEFAULT_SIZE)?,
        })
    }

    /// Cut one page out of an ordered working sequence. A window starting
    /// at or past the end yields an empty page, never an error.
    #[must_use]
    pub fn slice(self, ships: Vec<Ship>) -> Vec<Ship> {
        let start = (self.number as usize).saturating_mul(self.size as usize);
        let end = start.saturating_add(self.size as usize).min(ships.len());
        if start >= ships.len() {
            return Vec::new();
        }

        ships.into_iter().take(end).skip(start).collect()
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NUMBER, Self::DEFAULT_SIZE)
    }
}

///
/// PageError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum PageError {
    #[error("page number and size must be non-negative, got {raw}")]
    Negative { raw: i64 },

    #[error("page value {raw} is out of range")]
    OutOfRange { raw: i64 },
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::ShipClass,
        types::{Date, ShipId},
    };

    fn fleet(n: u64) -> Vec<Ship> {
        (1..=n)
            .map(|id| Ship {
                id: ShipId::from_raw(i64::try_from(id).unwrap()).ok(),
                name: format!("vessel-{id}"),
                planet: "Haven".to_string(),
                class: ShipClass::Transport,
                prod_date: Date::new_checked(2900, 1, 1).unwrap(),
                speed: 0.5,
                crew_size: 10,
                is_used: false,
                rating: 1.0,
            })
            .collect()
    }

    fn ids(ships: &[Ship]) -> Vec<u64> {
        ships.iter().filter_map(|s| s.id.map(ShipId::get)).collect()
    }

    #[test]
    fn defaults_are_first_page_of_three() {
        let spec = PageSpec::from_raw(None, None).unwrap();
        assert_eq!(spec, PageSpec::new(0, 3));
        assert_eq!(ids(&spec.slice(fleet(5))), [1, 2, 3]);
    }

    #[test]
    fn second_page_holds_the_remainder() {
        let spec = PageSpec::new(1, 3);
        assert_eq!(ids(&spec.slice(fleet(5))), [4, 5]);
    }

    #[test]
    fn window_past_the_end_is_empty() {
        let spec = PageSpec::new(10, 3);
        assert!(spec.slice(fleet(5)).is_empty());
    }

    #[test]
    fn negative_values_are_rejected() {
        assert_eq!(
            PageSpec::from_raw(Some(-1), None),
            Err(PageError::Negative { raw: -1 })
        );
        assert_eq!(
            PageSpec::from_raw(None, Some(-3)),
            Err(PageError::Negative { raw: -3 })
        );
    }

    #[test]
    fn zero_size_yields_empty_pages() {
        let spec = PageSpec::from_raw(Some(0), Some(0)).unwrap();
        assert!(spec.slice(fleet(5)).is_empty());
    }

    #[test]
    fn window_arithmetic_saturates() {
        let spec = PageSpec::new(u32::MAX, u32::MAX);
        assert!(spec.slice(fleet(5)).is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Consecutive pages partition the sequence.
            #[test]
            fn pages_partition_the_collection(len in 0_u64..40, size in 1_u32..7) {
                let ships = fleet(len);
                let mut rebuilt = Vec::new();
                for number in 0..=(len as u32 / size + 1) {
                    rebuilt.extend(PageSpec::new(number, size).slice(ships.clone()));
                }
                prop_assert_eq!(ids(&rebuilt), ids(&ships));
            }
        }
    }
}
