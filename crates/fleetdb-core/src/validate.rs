//! Field-level validation rules.
//!
//! Each rule is a small pure function returning the first violation it
//! finds. Creation composes every rule over the required fields; edits
//! reuse the same rules over whichever fields were supplied.

use crate::{
    model::{Ship, ShipInput},
    types::Date,
};
use thiserror::Error as ThisError;

/// Longest accepted `name` / `planet` value, in characters.
pub const MAX_TEXT_LEN: usize = 50;

/// Inclusive speed range.
pub const SPEED_MIN: f64 = 0.01;
pub const SPEED_MAX: f64 = 0.99;

/// Inclusive crew complement range.
pub const CREW_SIZE_MIN: u32 = 1;
pub const CREW_SIZE_MAX: u32 = 9999;

/// Inclusive production-year window.
pub const PROD_YEAR_MIN: i32 = 2800;
pub const PROD_YEAR_MAX: i32 = 3019;

///
/// RuleViolation
///
/// One violated field rule, carrying the offending value.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum RuleViolation {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be non-empty and at most {MAX_TEXT_LEN} characters, got {len}")]
    Text { field: &'static str, len: usize },

    #[error("speed {value} must be within [{SPEED_MIN}, {SPEED_MAX}]")]
    Speed { value: f64 },

    #[error("crew size {value} must be within [{CREW_SIZE_MIN}, {CREW_SIZE_MAX}]")]
    CrewSize { value: u32 },

    #[error(
        "production date {value} must fall within years {PROD_YEAR_MIN} through {PROD_YEAR_MAX}"
    )]
    ProdDate { value: Date },
}

/// Non-empty text of at most [`MAX_TEXT_LEN`] characters.
pub fn text(field: &'static str, value: &str) -> Result<(), RuleViolation> {
    let len = value.chars().count();
    if len == 0 || len > MAX_TEXT_LEN {
        return Err(RuleViolation::Text { field, len });
    }

    Ok(())
}

/// Speed within the inclusive [`SPEED_MIN`]..[`SPEED_MAX`] range.
/// Non-finite values fail the range test.
pub fn speed(value: f64) -> Result<(), RuleViolation> {
    if !(SPEED_MIN..=SPEED_MAX).contains(&value) {
        return Err(RuleViolation::Speed { value });
    }

    Ok(())
}

/// Crew complement within the inclusive [`CREW_SIZE_MIN`]..[`CREW_SIZE_MAX`] range.
pub fn crew_size(value: u32) -> Result<(), RuleViolation> {
    if !(CREW_SIZE_MIN..=CREW_SIZE_MAX).contains(&value) {
        return Err(RuleViolation::CrewSize { value });
    }

    Ok(())
}

/// Production date strictly after the epoch with a civil year inside the
/// [`PROD_YEAR_MIN`]..[`PROD_YEAR_MAX`] window. With day precision the
/// window test is exactly "after 2799-12-31 and before 3020-01-01".
pub fn prod_date(value: Date) -> Result<(), RuleViolation> {
    let year = value.year();
    if value <= Date::EPOCH || !(PROD_YEAR_MIN..=PROD_YEAR_MAX).contains(&year) {
        return Err(RuleViolation::ProdDate { value });
    }

    Ok(())
}

/// Full-record validity for creation: every required field present and
/// passing its rule. `is_used` is optional and defaults to unused. On
/// success the checked fields are materialized into an unsaved record with
/// a zeroed rating; the caller derives the real rating before persisting.
pub fn for_create(input: &ShipInput) -> Result<Ship, RuleViolation> {
    let name = require("name", input.name.as_deref())?;
    text("name", name)?;
    let planet = require("planet", input.planet.as_deref())?;
    text("planet", planet)?;
    let class = require("class", input.class)?;
    let date = require("prod_date", input.prod_date)?;
    prod_date(date)?;
    let speed_value = require("speed", input.speed)?;
    speed(speed_value)?;
    let crew = require("crew_size", input.crew_size)?;
    crew_size(crew)?;

    Ok(Ship {
        id: None,
        name: name.to_string(),
        planet: planet.to_string(),
        class,
        prod_date: date,
        speed: speed_value,
        crew_size: crew,
        is_used: input.is_used.unwrap_or(false),
        rating: 0.0,
    })
}

/// Edit validity: each supplied field must pass its rule. Absent fields
/// impose nothing. The first violation aborts the whole edit; callers
/// must not have mutated anything yet.
pub fn supplied(input: &ShipInput) -> Result<(), RuleViolation> {
    if let Some(name) = input.name.as_deref() {
        text("name", name)?;
    }
    if let Some(planet) = input.planet.as_deref() {
        text("planet", planet)?;
    }
    if let Some(value) = input.prod_date {
        prod_date(value)?;
    }
    if let Some(value) = input.speed {
        speed(value)?;
    }
    if let Some(value) = input.crew_size {
        crew_size(value)?;
    }

    Ok(())
}

fn require<T>(field: &'static str, value: Option<T>) -> Result<T, RuleViolation> {
    value.ok_or(RuleViolation::Missing { field })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShipClass;

    fn complete_input() -> ShipInput {
        ShipInput::new()
            .name("Rocinante")
            .planet("Mars")
            .class(ShipClass::Military)
            .prod_date(Date::new_checked(2900, 5, 20).unwrap())
            .speed(0.45)
            .crew_size(6)
    }

    #[test]
    fn text_bounds() {
        assert!(text("name", "x").is_ok());
        assert!(text("name", &"x".repeat(50)).is_ok());
        assert_eq!(
            text("name", ""),
            Err(RuleViolation::Text {
                field: "name",
                len: 0
            })
        );
        assert!(text("name", &"x".repeat(51)).is_err());
    }

    #[test]
    fn speed_bounds() {
        assert!(speed(0.01).is_ok());
        assert!(speed(0.99).is_ok());
        assert!(speed(0.009).is_err());
        assert!(speed(1.0).is_err());
        assert!(speed(f64::NAN).is_err());
    }

    #[test]
    fn crew_size_bounds() {
        assert!(crew_size(1).is_ok());
        assert!(crew_size(9999).is_ok());
        assert!(crew_size(0).is_err());
        assert!(crew_size(10000).is_err());
    }

    #[test]
    fn prod_date_window() {
        let ok = |s: &str| prod_date(Date::parse(s).unwrap());
        assert!(ok("2800-01-01").is_ok());
        assert!(ok("3019-12-31").is_ok());
        assert!(ok("2799-12-31").is_err());
        assert!(ok("3020-01-01").is_err());
    }

    #[test]
    fn prod_date_rejects_pre_epoch() {
        assert!(prod_date(Date::EPOCH).is_err());
        assert!(prod_date(Date::from_days(-1)).is_err());
    }

    #[test]
    fn create_requires_every_field() {
        assert!(for_create(&complete_input()).is_ok());

        for field in ["name", "planet", "class", "prod_date", "speed", "crew_size"] {
            let mut input = complete_input();
            match field {
                "name" => input.name = None,
                "planet" => input.planet = None,
                "class" => input.class = None,
                "prod_date" => input.prod_date = None,
                "speed" => input.speed = None,
                "crew_size" => input.crew_size = None,
                _ => unreachable!(),
            }
            assert_eq!(
                for_create(&input),
                Err(RuleViolation::Missing { field }),
                "missing {field} should fail creation"
            );
        }
    }

    #[test]
    fn create_materializes_the_record_with_used_defaulted() {
        let input = complete_input();
        assert!(input.is_used.is_none());

        let ship = for_create(&input).expect("complete input should validate");
        assert_eq!(ship.id, None);
        assert_eq!(ship.name, "Rocinante");
        assert_eq!(ship.class, ShipClass::Military);
        assert!(!ship.is_used, "absent is_used defaults to false");
        assert_eq!(ship.rating, 0.0, "rating is derived later, never here");

        let used = for_create(&complete_input().is_used(true)).unwrap();
        assert!(used.is_used);
    }

    #[test]
    fn supplied_checks_only_present_fields() {
        assert!(supplied(&ShipInput::new()).is_ok());
        assert!(supplied(&ShipInput::new().speed(0.5)).is_ok());
        assert!(supplied(&ShipInput::new().speed(2.0)).is_err());
        assert!(supplied(&ShipInput::new().name("")).is_err());
        // A valid field does not mask an invalid one.
        assert!(supplied(&ShipInput::new().name("ok").crew_size(0)).is_err());
    }
}
