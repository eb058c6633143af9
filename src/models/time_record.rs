//! Time record model.
//!
//! This module defines the [`TimeRecord`] struct representing one employee's
//! attendance on one calendar date, together with the minute arithmetic for
//! overnight shifts and the legally mandated 22:00–05:00 night window.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Minutes in one day.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Start of the night premium window, as minutes from midnight (22:00).
const NIGHT_WINDOW_START: i64 = 22 * 60;

/// End of the night premium window, as minutes from midnight (05:00).
const NIGHT_WINDOW_END: i64 = 5 * 60;

/// One employee's attendance for one calendar date.
///
/// `clock_out` numerically earlier than (or equal to) `clock_in` denotes an
/// overnight shift that ends on the following day. Records are created by
/// attendance entry or OCR upstream; the engine consumes them read-only and
/// only considers records with `is_approved == true`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TimeRecord;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let record = TimeRecord {
///     work_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     clock_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     clock_out: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     break_minutes: 60,
///     is_approved: true,
/// };
/// assert_eq!(record.worked_minutes(), 8 * 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRecord {
    /// The calendar date the shift started on.
    pub work_date: NaiveDate,
    /// Time of day the employee clocked in.
    pub clock_in: NaiveTime,
    /// Time of day the employee clocked out. May be earlier than `clock_in`
    /// for shifts that wrap past midnight.
    pub clock_out: NaiveTime,
    /// Unpaid break minutes taken during the shift.
    pub break_minutes: u32,
    /// Whether the record has been approved for payroll.
    pub is_approved: bool,
}

impl TimeRecord {
    /// Minutes from midnight for the clock-in time.
    fn start_minute(&self) -> i64 {
        i64::from(self.clock_in.hour()) * 60 + i64::from(self.clock_in.minute())
    }

    /// Minutes from midnight for the clock-out time, before wrap handling.
    fn end_minute(&self) -> i64 {
        i64::from(self.clock_out.hour()) * 60 + i64::from(self.clock_out.minute())
    }

    /// Returns the elapsed minutes from clock-in to clock-out, wrapping past
    /// midnight when `clock_out <= clock_in`.
    ///
    /// A clock-out equal to the clock-in wraps to a full 24 hours.
    pub fn elapsed_minutes(&self) -> i64 {
        let start = self.start_minute();
        let mut end = self.end_minute();
        if end <= start {
            end += MINUTES_PER_DAY;
        }
        end - start
    }

    /// Returns the worked minutes: elapsed minutes minus break minutes.
    ///
    /// A negative result means the record is inconsistent (the break exceeds
    /// the shift); the classifier rejects such records with an `InvalidShift`
    /// validation error rather than silently dropping them.
    pub fn worked_minutes(&self) -> i64 {
        self.elapsed_minutes() - i64::from(self.break_minutes)
    }

    /// Returns the overlap, in minutes, of the (possibly wrapped) work
    /// interval with the 22:00–05:00 night window.
    ///
    /// Breaks are not subtracted here; the classifier caps night minutes at
    /// the record's total worked minutes so that the hour partition holds.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::TimeRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// // 09:00–23:00: one hour inside the night window (22:00–23:00).
    /// let record = TimeRecord {
    ///     work_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
    ///     clock_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     clock_out: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
    ///     break_minutes: 0,
    ///     is_approved: true,
    /// };
    /// assert_eq!(record.night_overlap_minutes(), 60);
    /// ```
    pub fn night_overlap_minutes(&self) -> i64 {
        let start = self.start_minute();
        let end = start + self.elapsed_minutes();

        // Night windows on a timeline starting at midnight of work_date.
        // The shift interval [start, end) lies within [0, 2880); a shift
        // starting late and wrapping a full day can reach the second night's
        // window, so three windows cover every reachable overlap.
        let windows = [
            (0, NIGHT_WINDOW_END),
            (NIGHT_WINDOW_START, MINUTES_PER_DAY + NIGHT_WINDOW_END),
            (
                MINUTES_PER_DAY + NIGHT_WINDOW_START,
                2 * MINUTES_PER_DAY + NIGHT_WINDOW_END,
            ),
        ];

        windows
            .iter()
            .map(|&(w_start, w_end)| (end.min(w_end) - start.max(w_start)).max(0))
            .sum()
    }
}
