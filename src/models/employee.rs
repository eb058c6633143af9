//! Employee snapshot model.
//!
//! This module defines the [`EmployeeSnapshot`] struct carrying the subset of
//! the employee directory that payroll and the yukyu ledger need: base rate,
//! housing rent, hire date, and dependents.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A read-only snapshot of one employee, supplied by the employee directory.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeeSnapshot;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeSnapshot {
///     id: "emp_001".to_string(),
///     name: "Tanaka Hanako".to_string(),
///     base_hourly_rate: Decimal::new(1500, 0),
///     apartment_rent: None,
///     hire_date: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
///     dependents: 0,
/// };
/// assert_eq!(employee.id, "emp_001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The employee's base hourly rate in yen.
    pub base_hourly_rate: Decimal,
    /// Monthly rent for company housing, if the employee is assigned an
    /// apartment. Pro-ration for partial-period assignments happens upstream;
    /// this is the final figure to deduct.
    #[serde(default)]
    pub apartment_rent: Option<Decimal>,
    /// The date the employee was hired. Drives leave entitlement tenure.
    pub hire_date: NaiveDate,
    /// Number of dependents (informational, used by external tax tooling).
    #[serde(default)]
    pub dependents: u32,
}

impl EmployeeSnapshot {
    /// Returns the whole months of service between the hire date and `as_of`.
    ///
    /// A partial month does not count; an `as_of` before the hire date
    /// returns 0.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::EmployeeSnapshot;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeSnapshot {
    ///     id: "emp_001".to_string(),
    ///     name: "Tanaka Hanako".to_string(),
    ///     base_hourly_rate: Decimal::new(1500, 0),
    ///     apartment_rent: None,
    ///     hire_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
    ///     dependents: 0,
    /// };
    /// let as_of = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
    /// assert_eq!(employee.months_of_service(as_of), 6);
    /// ```
    pub fn months_of_service(&self, as_of: NaiveDate) -> u32 {
        if as_of < self.hire_date {
            return 0;
        }
        let mut months = (as_of.year() - self.hire_date.year()) * 12
            + (as_of.month() as i32 - self.hire_date.month() as i32);
        if as_of.day() < self.hire_date.day() {
            months -= 1;
        }
        months.max(0) as u32
    }
}
