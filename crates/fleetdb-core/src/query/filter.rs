use crate::{
    model::{Ship, ShipClass},
    types::Date,
};
use serde::{Deserialize, Serialize};

///
/// ShipFilter
///
/// Independently combinable optional criteria. A record is retained iff it
/// satisfies every supplied criterion; absent criteria impose nothing.
///
/// Bound semantics are a compatibility contract: `min_*`/`max_*` are strict
/// exclusive bounds, while the date window is asymmetric. `after` keeps
/// records not produced before the bound (inclusive); `before` keeps records
/// produced strictly before it.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ShipFilter {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub class: Option<ShipClass>,
    pub after: Option<Date>,
    pub before: Option<Date>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<u32>,
    pub max_crew_size: Option<u32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ShipFilter {
    /// Construct an empty filter (matches everything).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether one record satisfies every supplied criterion.
    #[must_use]
    pub fn matches(&self, ship: &Ship) -> bool {
        if let Some(name) = &self.name
            && !ship.name.contains(name.as_str())
        {
            return false;
        }
        if let Some(planet) = &self.planet
            && !ship.planet.contains(planet.as_str())
        {
            return false;
        }
        if let Some(class) = self.class
            && ship.class != class
        {
            return false;
        }
        if let Some(after) = self.after
            && ship.prod_date < after
        {
            return false;
        }
        if let Some(before) = self.before
            && ship.prod_date >= before
        {
            return false;
        }
        if let Some(is_used) = self.is_used
            && ship.is_used != is_used
        {
            return false;
        }
        if let Some(min_speed) = self.min_speed
            && ship.speed <= min_speed
        {
            return false;
        }
        if let Some(max_speed) = self.max_speed
            && ship.speed >= max_speed
        {
            return false;
        }
        if let Some(min_crew_size) = self.min_crew_size
            && ship.crew_size <= min_crew_size
        {
            return false;
        }
        if let Some(max_crew_size) = self.max_crew_size
            && ship.crew_size >= max_crew_size
        {
            return false;
        }
        if let Some(min_rating) = self.min_rating
            && ship.rating <= min_rating
        {
            return false;
        }
        if let Some(max_rating) = self.max_rating
            && ship.rating >= max_rating
        {
            return false;
        }

        true
    }

    /// Retain the matching records, preserving input order. Consumes the
    /// working sequence; records themselves are never mutated.
    #[must_use]
    pub fn apply(&self, ships: Vec<Ship>) -> Vec<Ship> {
        ships.into_iter().filter(|ship| self.matches(ship)).collect()
    }

    ///
    /// CONSTRUCTORS
    ///

    #[must_use]
    pub fn name(mut self, fragment: impl Into<String>) -> Self {
        self.name = Some(fragment.into());
        self
    }

    #[must_use]
    pub fn planet(mut self, fragment: impl Into<String>) -> Self {
        self.planet = Some(fragment.into());
        self
    }

    #[must_use]
    pub const fn class(mut self, class: ShipClass) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub const fn after(mut self, bound: Date) -> Self {
        self.after = Some(bound);
        self
    }

    #[must_use]
    pub const fn before(mut self, bound: Date) -> Self {
        self.before = Some(bound);
        self
    }

    #[must_use]
    pub const fn is_used(mut self, is_used: bool) -> Self {
        self.is_used = Some(is_used);
        self
    }

    #[must_use]
    pub const fn min_speed(mut self, bound: f64) -> Self {
        self.min_speed = Some(bound);
        self
    }

    #[must_use]
    pub const fn max_speed(mut self, bound: f64) -> Self {
        self.max_speed = Some(bound);
        self
    }

    #[must_use]
    pub const fn min_crew_size(mut self, bound: u32) -> Self {
        self.min_crew_size = Some(bound);
        self
    }

    #[must_use]
    pub const fn max_crew_size(mut self, bound: u32) -> Self {
        self.max_crew_size = Some(bound);
        self
    }

    #[must_use]
    pub const fn min_rating(mut self, bound: f64) -> Self {
        self.min_rating = Some(bound);
        self
    }

    #[must_use]
    pub const fn max_rating(mut self, bound: f64) -> Self {
        self.max_rating = Some(bound);
        self
    }
}

///
/// TESTS
///
