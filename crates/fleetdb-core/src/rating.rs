//! Derived rating computation.

/// Base factor applied to the speed term.
pub const RATING_FACTOR: f64 = 80.0;

/// Coefficient applied when the hull has seen prior service.
pub const USED_COEFFICIENT: f64 = 0.5;

/// Horizon year: ratings decay with distance from this year.
pub const HORIZON_YEAR: i32 = 3019;

/// Compute the rating from speed, usage flag, and production year:
///
/// ```text
/// k = 0.5 if used else 1.0
/// rating = round(80 * speed * k / (3019 - year + 1), 2)
/// ```
///
/// The result carries two-decimal precision; rounding is half-up on the
/// scaled value (all inputs here are positive, so `f64::round` matches).
#[must_use]
pub fn rating(speed: f64, is_used: bool, prod_year: i32) -> f64 {
    let k = if is_used { USED_COEFFICIENT } else { 1.0 };
    let age_span = f64::from(HORIZON_YEAR - prod_year + 1);
    let raw = RATING_FACTOR * speed * k / age_span;

    (raw * 100.0).round() / 100.0
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_year_new_ship() {
        // 80 * 0.5 / 1
        assert_eq!(rating(0.5, false, 3019), 40.0);
    }

    #[test]
    fn used_hull_halves_the_rating() {
        // 80 * 0.5 * 0.5 / 2
        assert_eq!(rating(0.5, true, 3018), 10.0);
        assert_eq!(rating(0.5, true, 3019), 20.0);
    }

    #[test]
    fn oldest_hull_in_the_window() {
        // 80 * 0.99 / 220 = 0.36
        assert_eq!(rating(0.99, false, 2800), 0.36);
    }

    #[test]
    fn result_is_rounded_to_two_decimals() {
        // 80 * 0.67 / 120 = 0.44666... -> 0.45
        assert_eq!(rating(0.67, false, 2900), 0.45);
        // 80 * 0.11 / 3 = 2.9333... -> 2.93
        assert_eq!(rating(0.11, false, 3017), 2.93);
    }

    #[test]
    fn rounding_is_half_up_on_the_scaled_value() {
        // 80 * 0.5 / 64 = 0.625 exactly; the scaled value 62.5 is an exact
        // binary half, so half-up lands on 0.63 where truncation would not.
        assert_eq!(rating(0.5, false, 2956), 0.63);
    }
}
