//! Money conversion helpers using rust_decimal for precision
//!
//! Upstream order rows carry monetary values as `f64` (or free text); all
//! arithmetic runs in `Decimal` and converts back to `f64` rounded to
//! 2 decimal places for the result structs.

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation.
///
/// Coerce-or-default boundary: NaN/Infinity contributes zero instead of
/// failing. The calculator must never error on malformed upstream data.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert an optional upstream numeric, treating absence as zero
#[inline]
pub fn opt_to_decimal(value: Option<f64>) -> Decimal {
    value.map(to_decimal).unwrap_or(Decimal::ZERO)
}

/// Round to 2 decimal places, half-up
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for the result structs, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    (to_decimal(a) - to_decimal(b)).abs() < MONEY_TOLERANCE
}
