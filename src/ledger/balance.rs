//! Yukyu balance model.
//!
//! One [`YukyuBalance`] represents one employee's leave entitlement for one
//! fiscal year, valid for exactly two years from its grant date per Japanese
//! labor law. Balances are never physically deleted; expiry flips the status
//! and moves the remaining days into `expired_days`.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a balance. The only transition is
/// `Active -> Expired`, triggered by the expire operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// The balance can still be drawn from.
    Active,
    /// The balance has expired; remaining days were forfeited.
    Expired,
}

/// One employee's leave entitlement for one fiscal year.
///
/// Conservation law: at all times,
/// `granted_days == used_days + remaining_days + expired_days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YukyuBalance {
    /// Unique identifier for this balance.
    pub id: Uuid,
    /// The employee this balance belongs to.
    pub employee_id: String,
    /// The fiscal year of the entitlement.
    pub fiscal_year: i32,
    /// The date the entitlement was granted.
    pub assigned_date: NaiveDate,
    /// Days granted, including any carried-over days.
    pub granted_days: Decimal,
    /// Days consumed by use operations.
    pub used_days: Decimal,
    /// Days forfeited at expiry.
    pub expired_days: Decimal,
    /// Days still available.
    pub remaining_days: Decimal,
    /// Two years after the assigned date; the balance expires on this date.
    pub expires_on: NaiveDate,
    /// Current lifecycle status.
    pub status: BalanceStatus,
}

impl YukyuBalance {
    /// Creates a freshly granted balance.
    pub fn granted(
        employee_id: impl Into<String>,
        fiscal_year: i32,
        granted_days: Decimal,
        assigned_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: employee_id.into(),
            fiscal_year,
            assigned_date,
            granted_days,
            used_days: Decimal::ZERO,
            expired_days: Decimal::ZERO,
            remaining_days: granted_days,
            expires_on: assigned_date + Months::new(24),
            status: BalanceStatus::Active,
        }
    }

    /// True while the balance can still be drawn from.
    pub fn is_active(&self) -> bool {
        self.status == BalanceStatus::Active
    }

    /// Checks the conservation law:
    /// `granted_days == used_days + remaining_days + expired_days`.
    pub fn conservation_holds(&self) -> bool {
        self.granted_days == self.used_days + self.remaining_days + self.expired_days
    }
}
