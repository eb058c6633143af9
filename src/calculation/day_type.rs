//! Day type classification.
//!
//! This module determines the premium category of a work date: company
//! holiday, Sunday, or ordinary workday. Holidays take priority over Sundays
//! so a minute is never billed under two premium day types.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::PayPeriod;

/// The premium category of a work date.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::DayType;
///
/// let day_type = DayType::Sunday;
/// assert_eq!(format!("{:?}", day_type), "Sunday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// An ordinary workday; non-night minutes count toward base hours.
    Workday,
    /// A Sunday that is not a company holiday; the sunday multiplier applies.
    Sunday,
    /// A company holiday; the holiday multiplier applies even on a Sunday.
    Holiday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Workday => write!(f, "Workday"),
            DayType::Sunday => write!(f, "Sunday"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Determines the day type for a work date within a pay period.
///
/// Company holidays override Sundays; every other date is a workday.
/// Saturdays carry no premium of their own in this engine.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{day_type, DayType};
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
///     holidays: vec![],
/// };
///
/// // 2025-10-05 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
/// assert_eq!(day_type(sunday, &period), DayType::Sunday);
///
/// // 2025-10-01 is a Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
/// assert_eq!(day_type(wednesday, &period), DayType::Workday);
/// ```
pub fn day_type(date: NaiveDate, period: &PayPeriod) -> DayType {
    if period.is_holiday(date) {
        DayType::Holiday
    } else if date.weekday() == Weekday::Sun {
        DayType::Sunday
    } else {
        DayType::Workday
    }
}
