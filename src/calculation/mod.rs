//! Calculation logic for the payroll engine.
//!
//! This module contains the calculation pipeline for one employee and pay
//! period: day-type classification, period-level hour classification with
//! the monthly overtime threshold, rate application with whole-yen
//! rounding, the deduction cascade down to net pay, and the orchestrating
//! payroll calculator with batch support.

mod calculator;
mod day_type;
mod deductions;
mod hours;
mod rates;

pub use calculator::{
    BatchResult, CalculationInputs, PayrollCalculator, PayrollDataSource,
};
pub use day_type::{DayType, day_type};
pub use deductions::{DeductionInputs, DeductionOutcome, apply_deductions};
pub use hours::{ClassifiedHours, classify_hours};
pub use rates::{apply_rates, resolve_rates, round_to_yen};
