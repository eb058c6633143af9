//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation and
//! yukyu ledger mutation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// Per-record problems inside a pay period (an inconsistent time record,
/// a negative net pay) are NOT raised as errors — they are accumulated
/// into the [`ValidationResult`](crate::models::ValidationResult) of the
/// returned [`PayrollResult`](crate::models::PayrollResult). This enum
/// covers the conditions that prevent an operation from succeeding at all.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     employee_id: "emp_042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_042");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse or validation error.
        message: String,
    },

    /// No rate configuration covers the requested company and date.
    #[error("No rate configuration for company '{company_id}' effective on {date}")]
    ConfigurationMissing {
        /// The company whose rates were requested.
        company_id: String,
        /// The date for which no rate set is effective.
        date: NaiveDate,
    },

    /// The requested employee does not exist in the data source.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee ID that was not found.
        employee_id: String,
    },

    /// A time record's times are inconsistent (worked minutes would be
    /// negative after subtracting breaks).
    #[error("Invalid shift on {work_date}: {message}")]
    InvalidShift {
        /// The work date of the invalid record.
        work_date: NaiveDate,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A Use operation requested more leave days than the employee has
    /// remaining across all active balances. No balance is mutated.
    #[error(
        "Insufficient yukyu balance for employee '{employee_id}': requested {requested} days, {available} available"
    )]
    InsufficientBalance {
        /// The employee whose balances were checked.
        employee_id: String,
        /// The number of days requested.
        requested: Decimal,
        /// The total remaining days across active balances.
        available: Decimal,
    },

    /// Grant was called twice for the same employee and fiscal year.
    #[error(
        "Yukyu balance already exists for employee '{employee_id}' in fiscal year {fiscal_year}"
    )]
    DuplicateGrant {
        /// The employee the duplicate grant targeted.
        employee_id: String,
        /// The fiscal year of the existing balance.
        fiscal_year: i32,
    },

    /// An Adjust operation would drive a balance's remaining days below zero.
    #[error(
        "Invalid yukyu adjustment for employee '{employee_id}' fiscal year {fiscal_year}: {message}"
    )]
    InvalidAdjustment {
        /// The employee whose balance was targeted.
        employee_id: String,
        /// The fiscal year of the targeted balance.
        fiscal_year: i32,
        /// A description of why the adjustment was rejected.
        message: String,
    },

    /// No balance exists for the given employee and fiscal year.
    #[error("No yukyu balance for employee '{employee_id}' in fiscal year {fiscal_year}")]
    BalanceNotFound {
        /// The employee whose balance was requested.
        employee_id: String,
        /// The fiscal year that has no balance.
        fiscal_year: i32,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
