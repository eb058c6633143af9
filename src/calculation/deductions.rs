//! The deduction cascade.
//!
//! This module takes gross pay down to net: five independent percentage
//! deductions (each computed off gross, never compounded), the apartment
//! rent figure, the leave-day valuation under the company's leave policy,
//! and caller-supplied fixed deductions.

use rust_decimal::Decimal;

use crate::config::{LeavePolicy, RateConfiguration};
use crate::models::DeductionsDetail;

use super::rates::round_to_yen;

/// Caller-supplied inputs to the deduction cascade.
#[derive(Debug, Clone, Default)]
pub struct DeductionInputs {
    /// Monthly apartment rent to deduct (already pro-rated upstream if the
    /// housing assignment covered only part of the period).
    pub apartment_rent: Decimal,
    /// Count of approved leave days within the period, from the yukyu
    /// ledger or the HR approval workflow.
    pub yukyu_days_approved: Decimal,
    /// Other fixed deductions passed through as-is.
    pub other: Decimal,
}

/// The outcome of the deduction cascade.
#[derive(Debug, Clone)]
pub struct DeductionOutcome {
    /// Gross pay after any paid-leave credit.
    pub gross: Decimal,
    /// The paid-leave value credited into gross; zero under the unpaid
    /// policy, so consumers can reconcile gross against the bucket amounts.
    pub yukyu_credit: Decimal,
    /// Itemized deductions.
    pub deductions: DeductionsDetail,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// `gross - total_deductions`, exactly.
    pub net: Decimal,
    /// Non-fatal warnings (negative net pay).
    pub warnings: Vec<String>,
}

/// Computes one percentage deduction off gross, rounded to whole yen.
fn percentage_of(gross: Decimal, rate_percent: Decimal) -> Decimal {
    round_to_yen(gross * rate_percent / Decimal::new(100, 0))
}

/// Applies the deduction cascade to gross pay.
///
/// The leave-day valuation is `yukyu_days_approved * standard_daily_hours *
/// base_hourly_rate`. Under [`LeavePolicy::UnpaidDeducted`] it becomes the
/// `yukyu_deduction` line; under [`LeavePolicy::Paid`] it is credited into
/// gross instead and the deduction line stays zero. Percentage deductions
/// are computed off the credited gross, since the credit is part of pay.
///
/// A negative net pay produces a warning, not an error — the result is
/// still returned for human review.
pub fn apply_deductions(
    gross: Decimal,
    config: &RateConfiguration,
    base_hourly_rate: Decimal,
    inputs: &DeductionInputs,
) -> DeductionOutcome {
    let leave_value = round_to_yen(
        inputs.yukyu_days_approved * config.standard_daily_hours * base_hourly_rate,
    );

    let (gross, yukyu_credit, yukyu_deduction) = match config.leave_policy {
        LeavePolicy::UnpaidDeducted => (gross, Decimal::ZERO, leave_value),
        LeavePolicy::Paid => (gross + leave_value, leave_value, Decimal::ZERO),
    };

    let deductions = DeductionsDetail {
        income_tax: percentage_of(gross, config.income_tax_rate),
        resident_tax: percentage_of(gross, config.resident_tax_rate),
        health_insurance: percentage_of(gross, config.health_insurance_rate),
        pension: percentage_of(gross, config.pension_rate),
        employment_insurance: percentage_of(gross, config.employment_insurance_rate),
        apartment: round_to_yen(inputs.apartment_rent),
        yukyu_deduction,
        other: round_to_yen(inputs.other),
    };

    let total_deductions = deductions.income_tax
        + deductions.resident_tax
        + deductions.health_insurance
        + deductions.pension
        + deductions.employment_insurance
        + deductions.apartment
        + deductions.yukyu_deduction
        + deductions.other;

    let net = gross - total_deductions;

    let mut warnings = Vec::new();
    if net < Decimal::ZERO {
        warnings.push(format!("Negative net pay: {net}"));
    }

    DeductionOutcome {
        gross,
        yukyu_credit,
        deductions,
        total_deductions,
        net,
        warnings,
    }
}
