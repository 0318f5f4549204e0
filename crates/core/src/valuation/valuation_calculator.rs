//! Home value heuristic used to reward lead capture.
//!
//! This is a deliberately simple linear formula, not an automated valuation
//! model: price per square foot scaled by condition and age, plus flat
//! bonuses per bedroom and bathroom, widened into a +/-10% band.

use chrono::{Datelike, Local};
use log::debug;

use crate::constants::{
    AGE_PENALTY_PER_YEAR, BASE_PRICE_PER_SQFT, BATHROOM_BONUS, BEDROOM_BONUS,
    MIN_AGE_ADJUSTMENT, VALUATION_HIGH_FACTOR, VALUATION_LOW_FACTOR, VALUATION_ROUNDING_STEP,
};
use crate::formatting::{finite_or_zero, round_half_up};
use crate::valuation::valuation_model::{ValuationInput, ValuationResult};

/// Estimates the value range using the current calendar year for the age
/// adjustment.
pub fn estimate_value(input: &ValuationInput) -> ValuationResult {
    estimate_value_as_of(input, i64::from(Local::now().year()))
}

/// Estimates the value range as if the current year were `current_year`.
pub fn estimate_value_as_of(input: &ValuationInput, current_year: i64) -> ValuationResult {
    let square_footage = finite_or_zero(input.square_footage);
    let age_adjust = age_adjustment(input.year_built, current_year);
    let bed_bath_bonus =
        input.bedrooms as f64 * BEDROOM_BONUS + input.bathrooms as f64 * BATHROOM_BONUS;

    let base_price = square_footage
        * BASE_PRICE_PER_SQFT
        * input.condition.multiplier()
        * age_adjust
        + bed_bath_bonus;

    let result = ValuationResult {
        low: round_to_step(base_price * VALUATION_LOW_FACTOR),
        high: round_to_step(base_price * VALUATION_HIGH_FACTOR),
    };
    debug!(
        "Valuation for {} sqft ({}) built {}: {} - {}",
        square_footage,
        input.condition.as_str(),
        input.year_built,
        result.low,
        result.high
    );
    result
}

/// `max(0.75, 1 - age * 0.003)`. Properties built in the future get a bonus.
pub fn age_adjustment(year_built: i64, current_year: i64) -> f64 {
    let age = current_year.saturating_sub(year_built) as f64;
    (1.0 - age * AGE_PENALTY_PER_YEAR).max(MIN_AGE_ADJUSTMENT)
}

fn round_to_step(amount: f64) -> f64 {
    let rounded = round_half_up(amount / VALUATION_ROUNDING_STEP) * VALUATION_ROUNDING_STEP;
    // normalizes -0.0
    rounded + 0.0
}
