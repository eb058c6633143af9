//! Domain models for the payroll engine.
//!
//! This module contains the data structures consumed and produced by the
//! engine: time records, employee snapshots, pay periods, and the payroll
//! result tree.

mod employee;
mod pay_period;
mod payroll_result;
mod time_record;

pub use employee::EmployeeSnapshot;
pub use pay_period::{CompanyHoliday, PayPeriod};
pub use payroll_result::{
    Amounts, DeductionsDetail, HoursBreakdown, PayrollResult, ResolvedRates, ValidationResult,
};
pub use time_record::TimeRecord;
