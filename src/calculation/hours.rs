//! Hours classification for a pay period.
//!
//! This module turns a set of approved time records into the period-level
//! [`HoursBreakdown`]: per-record minutes are bucketed into mutually
//! exclusive night/holiday/sunday/base categories, then base minutes are
//! split into regular and overtime at the monthly standard-hours threshold.

use rust_decimal::Decimal;

use crate::error::EngineError;
use crate::models::{HoursBreakdown, PayPeriod, TimeRecord};

use super::day_type::{DayType, day_type};

/// Minutes in one hour, as a Decimal divisor.
const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// The output of classifying a period's time records.
///
/// Invalid records produce an entry in `errors` and are excluded from the
/// breakdown; the breakdown reflects all valid records.
#[derive(Debug, Clone)]
pub struct ClassifiedHours {
    /// The period-level hour breakdown over valid records.
    pub breakdown: HoursBreakdown,
    /// One message per rejected record.
    pub errors: Vec<String>,
}

/// Classifies approved time records into the period hour breakdown.
///
/// Per record:
/// 1. Worked minutes = elapsed (wrapping past midnight) minus breaks; a
///    negative result rejects the record with a validation error.
/// 2. Night minutes = overlap with the 22:00–05:00 window, capped at the
///    record's worked minutes.
/// 3. Remaining minutes go to holiday, sunday, or base depending on the
///    day type (holiday overrides Sunday; night always wins where the night
///    window overlaps a premium day).
///
/// After all records, summed base minutes are split at
/// `standard_hours_per_month`: minutes up to the threshold are regular,
/// the excess is overtime. Night/holiday/sunday minutes are never
/// reclassified as overtime.
///
/// Every worked minute of a valid record lands in exactly one bucket, so
/// `regular + overtime + night + holiday + sunday == total`.
pub fn classify_hours(
    records: &[TimeRecord],
    period: &PayPeriod,
    standard_hours_per_month: Decimal,
) -> ClassifiedHours {
    let mut errors = Vec::new();
    let mut base_minutes: i64 = 0;
    let mut night_minutes: i64 = 0;
    let mut holiday_minutes: i64 = 0;
    let mut sunday_minutes: i64 = 0;
    let mut work_days: u32 = 0;

    for record in records {
        let worked = record.worked_minutes();
        if worked < 0 {
            errors.push(
                EngineError::InvalidShift {
                    work_date: record.work_date,
                    message: format!(
                        "worked minutes are negative ({} elapsed, {} break)",
                        record.elapsed_minutes(),
                        record.break_minutes
                    ),
                }
                .to_string(),
            );
            continue;
        }
        if worked > 0 {
            work_days += 1;
        }

        // Cap at worked minutes so breaks cannot push the partition negative.
        let night = record.night_overlap_minutes().min(worked);
        let day_portion = worked - night;
        night_minutes += night;

        match day_type(record.work_date, period) {
            DayType::Holiday => holiday_minutes += day_portion,
            DayType::Sunday => sunday_minutes += day_portion,
            DayType::Workday => base_minutes += day_portion,
        }
    }

    let base_total = Decimal::from(base_minutes);
    let threshold = standard_hours_per_month * MINUTES_PER_HOUR;
    let regular_minutes = base_total.min(threshold);
    let overtime_minutes = (base_total - threshold).max(Decimal::ZERO);

    let regular = regular_minutes / MINUTES_PER_HOUR;
    let overtime = overtime_minutes / MINUTES_PER_HOUR;
    let night = Decimal::from(night_minutes) / MINUTES_PER_HOUR;
    let holiday = Decimal::from(holiday_minutes) / MINUTES_PER_HOUR;
    let sunday = Decimal::from(sunday_minutes) / MINUTES_PER_HOUR;

    ClassifiedHours {
        breakdown: HoursBreakdown {
            regular,
            overtime,
            night,
            holiday,
            sunday,
            total: regular + overtime + night + holiday + sunday,
            work_days,
        },
        errors,
    }
}
