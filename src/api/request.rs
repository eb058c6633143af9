//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the payroll and
//! yukyu endpoints. Employee, period, and time-record payloads reuse the
//! domain model types directly; the engine holds no employee master data,
//! so every calculation request carries its own.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeSnapshot, PayPeriod, TimeRecord};

/// Request body for the `/payroll/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The company whose rate configuration applies.
    pub company_id: String,
    /// The employee being paid.
    pub employee: EmployeeSnapshot,
    /// The pay period for the calculation.
    pub period: PayPeriod,
    /// The employee's time records for the period.
    pub time_records: Vec<TimeRecord>,
    /// Fixed allowances added to gross as opaque line items.
    #[serde(default)]
    pub allowances: Decimal,
    /// Fixed deductions beyond the configured percentages and rent.
    #[serde(default)]
    pub other_deductions: Decimal,
    /// Approved leave days within the period.
    #[serde(default)]
    pub yukyu_days_approved: Decimal,
}

/// One employee's slice of a batch calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEmployeeRequest {
    /// The employee being paid.
    pub employee: EmployeeSnapshot,
    /// The employee's time records for the period.
    pub time_records: Vec<TimeRecord>,
    /// Approved leave days within the period.
    #[serde(default)]
    pub yukyu_days_approved: Decimal,
}

/// Request body for the `/payroll/calculate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculationRequest {
    /// The company whose rate configuration applies.
    pub company_id: String,
    /// The pay period shared by every employee in the batch.
    pub period: PayPeriod,
    /// The employees to calculate, each with its own data.
    pub employees: Vec<BatchEmployeeRequest>,
}

/// Request body for the `/yukyu/grant` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantRequest {
    /// The employee receiving the entitlement.
    pub employee_id: String,
    /// The fiscal year of the entitlement.
    pub fiscal_year: i32,
    /// Days to grant.
    pub days: Decimal,
    /// The grant date; expiry is two years later.
    pub grant_date: NaiveDate,
    /// Free-text reason recorded on the transaction.
    #[serde(default)]
    pub reason: String,
}

/// Request body for the `/yukyu/use` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseRequest {
    /// The employee consuming leave.
    pub employee_id: String,
    /// Days to consume.
    pub days: Decimal,
    /// The business date of the usage.
    pub usage_date: NaiveDate,
    /// Free-text reason recorded on the transactions.
    #[serde(default)]
    pub reason: String,
}

/// Request body for the `/yukyu/expire` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpireRequest {
    /// Balances whose expiry date is on or before this date are expired.
    pub as_of_date: NaiveDate,
}

/// Request body for the `/yukyu/auto_grant` endpoint.
///
/// The engine holds no employee master data, so the caller supplies the
/// snapshots to evaluate, exactly as the batch calculation endpoint does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoGrantRequest {
    /// The fiscal year of the entitlements to create.
    pub fiscal_year: i32,
    /// The grant date used for tenure evaluation and expiry.
    pub grant_date: NaiveDate,
    /// The employees to evaluate for a tenure-based grant.
    pub employees: Vec<EmployeeSnapshot>,
}

/// Request body for the `/yukyu/adjust` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustRequest {
    /// The employee whose balance is corrected.
    pub employee_id: String,
    /// The fiscal year of the targeted balance.
    pub fiscal_year: i32,
    /// Signed day delta applied to granted and remaining days.
    pub delta_days: Decimal,
    /// The business date of the correction.
    pub adjustment_date: NaiveDate,
    /// Free-text reason recorded on the transaction.
    #[serde(default)]
    pub reason: String,
}
