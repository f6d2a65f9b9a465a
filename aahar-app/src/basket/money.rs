//! Money helpers for basket pricing
//!
//! Prices are stored as `f64` in models and snapshots; every computation
//! runs through `Decimal` and rounds half-up to two places only at the
//! display/serialization boundary.

use rust_decimal::prelude::*;
use shared::basket::BasketLine;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total: effective portion price * quantity
pub fn line_total(line: &BasketLine) -> Decimal {
    to_decimal(line.effective_price()) * Decimal::from(line.quantity)
}

/// Basket total: sum of line totals
pub fn basket_total(lines: &[BasketLine]) -> Decimal {
    lines.iter().map(line_total).sum()
}

/// Format an amount in rupees for display
///
/// # Examples
///
/// ```
/// use aahar_app::basket::money::{format_inr, to_decimal};
///
/// assert_eq!(format_inr(to_decimal(220.0)), "₹220.00");
/// assert_eq!(format_inr(to_decimal(12.5)), "₹12.50");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    format!("₹{rounded:.2}")
}
