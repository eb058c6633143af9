//! Rate application.
//!
//! This module applies the configured multipliers to a period hour breakdown,
//! producing the monetary bucket amounts and gross pay. All monetary values
//! are rounded to whole yen with round-half-up, once per final amount; hour
//! values are never rounded.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::RateConfiguration;
use crate::models::{Amounts, HoursBreakdown, ResolvedRates};

/// Rounds a monetary value to whole yen using round-half-up.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_to_yen;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_yen(Decimal::from_str("100.5").unwrap()), Decimal::from_str("101").unwrap());
/// assert_eq!(round_to_yen(Decimal::from_str("100.4").unwrap()), Decimal::from_str("100").unwrap());
/// ```
pub fn round_to_yen(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Applies rate multipliers to an hour breakdown.
///
/// Bucket amounts are `hours * base_hourly_rate * multiplier` (multiplier 1
/// for regular hours), each rounded to whole yen at the end. `allowances` is
/// an opaque pass-through total (e.g. commute or attendance allowances)
/// added to gross as-is after rounding; it is not computed here.
///
/// Returns the monetary amounts with `yukyu_credit`, `total_deductions`,
/// and `net` left at zero — the deduction cascade fills those in.
pub fn apply_rates(
    hours: &HoursBreakdown,
    config: &RateConfiguration,
    base_hourly_rate: Decimal,
    allowances: Decimal,
) -> Amounts {
    let base = round_to_yen(hours.regular * base_hourly_rate);
    let overtime = round_to_yen(hours.overtime * base_hourly_rate * config.overtime_rate);
    let night = round_to_yen(hours.night * base_hourly_rate * config.night_rate);
    let holiday = round_to_yen(hours.holiday * base_hourly_rate * config.holiday_rate);
    let sunday = round_to_yen(hours.sunday * base_hourly_rate * config.sunday_rate);

    let gross = base + overtime + night + holiday + sunday + round_to_yen(allowances);

    Amounts {
        base,
        overtime,
        night,
        holiday,
        sunday,
        yukyu_credit: Decimal::ZERO,
        gross,
        total_deductions: Decimal::ZERO,
        net: Decimal::ZERO,
    }
}

/// Resolves the rates used for a calculation, for inclusion in the result.
pub fn resolve_rates(config: &RateConfiguration, base_hourly_rate: Decimal) -> ResolvedRates {
    ResolvedRates {
        base_hourly_rate,
        overtime_rate: config.overtime_rate,
        night_rate: config.night_rate,
        holiday_rate: config.holiday_rate,
        sunday_rate: config.sunday_rate,
    }
}
