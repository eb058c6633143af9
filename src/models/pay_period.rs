//! Pay period and company holiday models.
//!
//! This module contains the [`PayPeriod`] and [`CompanyHoliday`] types that
//! define the calculation window and the company holiday calendar consulted
//! by day-type classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A company holiday inside a pay period.
///
/// Holidays come from the (external) company calendar and take priority over
/// Sundays when classifying a work day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "年末年始" / "New Year closure").
    pub name: String,
}

/// A pay period with its date range and company holidays.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CompanyHoliday, PayPeriod};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
///     holidays: vec![CompanyHoliday {
///         date: NaiveDate::from_ymd_opt(2025, 10, 13).unwrap(),
///         name: "Sports Day".to_string(),
///     }],
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()));
/// assert!(period.is_holiday(NaiveDate::from_ymd_opt(2025, 10, 13).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// Company holidays that fall within this pay period.
    #[serde(default)]
    pub holidays: Vec<CompanyHoliday>,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period, inclusive of
    /// both endpoints.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks if a given date is a company holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }
}
