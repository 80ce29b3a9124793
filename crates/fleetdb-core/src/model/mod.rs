use crate::{
    rating,
    types::{Date, ShipId},
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// ShipClass
///
/// Closed hull classification. The external spelling is upper case;
/// parsing accepts either case.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipClass {
    Transport,
    Military,
    Merchant,
}

impl FromStr for ShipClass {
    type Err = UnknownShipClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TRANSPORT" => Ok(Self::Transport),
            "MILITARY" => Ok(Self::Military),
            "MERCHANT" => Ok(Self::Merchant),
            _ => Err(UnknownShipClass {
                value: s.to_string(),
            }),
        }
    }
}

///
/// UnknownShipClass
///

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown ship class '{value}'")]
pub struct UnknownShipClass {
    pub value: String,
}

///
/// Ship
///
/// The registry entity. `id` is `None` until the store assigns one on
/// first save and never changes afterwards. `rating` is derived; it is
/// recomputed on every create and edit, never accepted from a client.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Ship {
    pub id: Option<ShipId>,
    pub name: String,
    pub planet: String,
    pub class: ShipClass,
    pub prod_date: Date,
    pub speed: f64,
    pub crew_size: u32,
    pub is_used: bool,
    pub rating: f64,
}

impl Ship {
    /// Recompute the derived rating from the current speed, usage flag,
    /// and production year.
    pub fn recompute_rating(&mut self) {
        self.rating = rating::rating(self.speed, self.is_used, self.prod_date.year());
    }
}

///
/// ShipInput
///
/// Boundary-supplied candidate fields for create and edit. Every field is
/// optional; `id` and `rating` are not part of the input surface, and
/// unknown fields are rejected outright.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ShipInput {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub class: Option<ShipClass>,
    pub prod_date: Option<Date>,
    pub speed: Option<f64>,
    pub crew_size: Option<u32>,
    pub is_used: Option<bool>,
}

impl ShipInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.planet.is_none()
            && self.class.is_none()
            && self.prod_date.is_none()
            && self.speed.is_none()
            && self.crew_size.is_none()
            && self.is_used.is_none()
    }

    /// Overwrite the supplied fields on an existing record, leaving absent
    /// fields untouched. Callers validate the input first; this merge never
    /// fails and never touches `id` or `rating`.
    pub fn apply_to(&self, ship: &mut Ship) {
        if let Some(name) = &self.name {
            ship.name = name.clone();
        }
        if let Some(planet) = &self.planet {
            ship.planet = planet.clone();
        }
        if let Some(class) = self.class {
            ship.class = class;
        }
        if let Some(prod_date) = self.prod_date {
            ship.prod_date = prod_date;
        }
        if let Some(speed) = self.speed {
            ship.speed = speed;
        }
        if let Some(crew_size) = self.crew_size {
            ship.crew_size = crew_size;
        }
        if let Some(is_used) = self.is_used {
            ship.is_used = is_used;
        }
    }

    ///
    /// CONSTRUCTORS
    ///

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn planet(mut self, planet: impl Into<String>) -> Self {
        self.planet = Some(planet.into());
        self
    }

    #[must_use]
    pub const fn class(mut self, class: ShipClass) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub const fn prod_date(mut self, prod_date: Date) -> Self {
        self.prod_date = Some(prod_date);
        self
    }

    #[must_use]
    pub const fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    #[must_use]
    pub const fn crew_size(mut self, crew_size: u32) -> Self {
        self.crew_size = Some(crew_size);
        self
    }

    #[must_use]
    pub const fn is_used(mut self, is_used: bool) -> Self {
        self.is_used = Some(is_used);
        self
    }
}

///
/// TESTS
///
