//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its fixed sub-structs:
//! the hour breakdown, resolved multiplier rates, monetary amounts, deduction
//! detail, and the per-period validation report.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// Period-level hour breakdown produced by the hours classifier.
///
/// The five hour buckets are mutually exclusive: every worked minute lands in
/// exactly one of regular/overtime/night/holiday/sunday, so their sum equals
/// `total` exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursBreakdown {
    /// Regular hours (base hours up to the monthly standard).
    pub regular: Decimal,
    /// Overtime hours (base hours beyond the monthly standard).
    pub overtime: Decimal,
    /// Hours inside the 22:00–05:00 night window.
    pub night: Decimal,
    /// Non-night hours worked on company holidays.
    pub holiday: Decimal,
    /// Non-night hours worked on Sundays (that are not holidays).
    pub sunday: Decimal,
    /// Total worked hours across all valid records.
    pub total: Decimal,
    /// Count of records with positive worked minutes.
    pub work_days: u32,
}

/// The multiplier rates and base hourly rate resolved for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRates {
    /// The employee's base hourly rate in yen.
    pub base_hourly_rate: Decimal,
    /// Overtime multiplier applied to overtime hours.
    pub overtime_rate: Decimal,
    /// Night multiplier applied to night-window hours.
    pub night_rate: Decimal,
    /// Holiday multiplier applied to holiday hours.
    pub holiday_rate: Decimal,
    /// Sunday multiplier applied to Sunday hours.
    pub sunday_rate: Decimal,
}

/// Monetary amounts of a payroll calculation, in whole yen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amounts {
    /// Pay for regular hours at the base rate.
    pub base: Decimal,
    /// Pay for overtime hours.
    pub overtime: Decimal,
    /// Pay for night-window hours.
    pub night: Decimal,
    /// Pay for holiday hours.
    pub holiday: Decimal,
    /// Pay for Sunday hours.
    pub sunday: Decimal,
    /// Paid-leave value credited into gross under the paid-leave policy;
    /// zero under the unpaid policy.
    pub yukyu_credit: Decimal,
    /// Gross pay: the five buckets plus pass-through allowances and any
    /// paid-leave credit.
    pub gross: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Net pay: `gross - total_deductions`, exactly.
    pub net: Decimal,
}

/// Itemized deductions applied to gross pay.
///
/// Each percentage deduction is computed independently off gross, never
/// compounded on the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionsDetail {
    /// Withheld income tax.
    pub income_tax: Decimal,
    /// Withheld resident tax.
    pub resident_tax: Decimal,
    /// Health insurance premium.
    pub health_insurance: Decimal,
    /// Pension contribution.
    pub pension: Decimal,
    /// Employment insurance premium.
    pub employment_insurance: Decimal,
    /// Company apartment rent (final figure, pro-rated upstream if needed).
    pub apartment: Decimal,
    /// Value of approved leave days deducted under the unpaid-leave policy.
    pub yukyu_deduction: Decimal,
    /// Other fixed deductions passed through by the caller.
    pub other: Decimal,
}

/// The validation report embedded in every payroll result.
///
/// Errors describe rejected records (excluded from sums); warnings describe
/// conditions surfaced for human review that do not block the result, such
/// as a negative net pay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Per-record validation errors accumulated during classification.
    pub errors: Vec<String>,
    /// Non-fatal warnings accumulated during calculation.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Records a validation error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Records a non-fatal warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// True when no errors were recorded. Warnings do not affect validity.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The complete result of one employee/period payroll calculation.
///
/// Created fresh per call and immutable afterwards; persistence is the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The pay period covered.
    pub period: PayPeriod,
    /// Period-level hour breakdown.
    pub hours: HoursBreakdown,
    /// The rates used.
    pub rates: ResolvedRates,
    /// Monetary amounts down to net pay.
    pub amounts: Amounts,
    /// Itemized deductions.
    pub deductions: DeductionsDetail,
    /// Validation errors and warnings for the period.
    pub validation: ValidationResult,
}
