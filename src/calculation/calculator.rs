//! Payroll calculation orchestration.
//!
//! This module wires the classify → rate → deduct pipeline into the public
//! calculator contract: single-employee calculation from data the caller
//! already holds, lookup-based calculation through a [`PayrollDataSource`],
//! and batch runs where one employee's failure never aborts the others.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::RateConfiguration;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeSnapshot, PayPeriod, PayrollResult, TimeRecord, ValidationResult};

use super::deductions::{DeductionInputs, apply_deductions};
use super::hours::classify_hours;
use super::rates::{apply_rates, resolve_rates};

/// Caller-supplied, pass-through inputs to a single calculation.
#[derive(Debug, Clone, Default)]
pub struct CalculationInputs {
    /// Fixed allowances added to gross as opaque line items (e.g. commute
    /// or attendance allowances).
    pub allowances: Decimal,
    /// Fixed deductions beyond the configured percentages and rent.
    pub other_deductions: Decimal,
    /// Approved leave days within the period, from the yukyu ledger.
    pub yukyu_days_approved: Decimal,
}

/// Seam to the external collaborators that own employee, attendance, and
/// leave-approval data.
///
/// Implementations are expected to have fetched their data already; these
/// calls must not block on I/O.
pub trait PayrollDataSource {
    /// Returns the employee snapshot, or `None` if the employee is unknown.
    fn employee(&self, employee_id: &str) -> Option<EmployeeSnapshot>;

    /// Returns the employee's time records overlapping the period. The
    /// calculator filters for approval and period containment itself.
    fn time_records(&self, employee_id: &str, period: &PayPeriod) -> Vec<TimeRecord>;

    /// Returns the count of approved leave days within the period.
    fn approved_leave_days(&self, employee_id: &str, period: &PayPeriod) -> Decimal;
}

/// Summary of a batch payroll run.
///
/// `results` holds one slot per requested employee, in request order; failed
/// slots carry the error instead of aborting the batch. Totals cover the
/// successful results only.
#[derive(Debug)]
pub struct BatchResult {
    /// Per-employee outcomes, in request order.
    pub results: Vec<EngineResult<PayrollResult>>,
    /// Number of successful calculations.
    pub success_count: usize,
    /// Number of failed calculations.
    pub error_count: usize,
    /// Sum of gross pay over successful results.
    pub total_gross: Decimal,
    /// Sum of net pay over successful results.
    pub total_net: Decimal,
}

/// Orchestrates payroll calculation for one rate configuration.
///
/// The configuration is injected at construction; the calculator holds no
/// other state and is safe to share across concurrent requests.
#[derive(Debug, Clone)]
pub struct PayrollCalculator {
    config: RateConfiguration,
}

impl PayrollCalculator {
    /// Creates a calculator for the given rate configuration.
    pub fn new(config: RateConfiguration) -> Self {
        Self { config }
    }

    /// Returns the rate configuration this calculator applies.
    pub fn configuration(&self) -> &RateConfiguration {
        &self.config
    }

    /// Calculates payroll for one employee from data the caller already
    /// holds (the batch-friendly overload that avoids N+1 lookups).
    ///
    /// Records outside the period or not approved are ignored. Invalid
    /// records become validation errors in the result; they never abort the
    /// calculation.
    pub fn calculate(
        &self,
        employee: &EmployeeSnapshot,
        records: &[TimeRecord],
        period: &PayPeriod,
        inputs: &CalculationInputs,
    ) -> EngineResult<PayrollResult> {
        if employee.base_hourly_rate <= Decimal::ZERO {
            return Err(EngineError::CalculationError {
                message: format!(
                    "employee '{}' has a non-positive base hourly rate",
                    employee.id
                ),
            });
        }

        let in_scope: Vec<TimeRecord> = records
            .iter()
            .filter(|r| r.is_approved && period.contains_date(r.work_date))
            .cloned()
            .collect();

        let classified = classify_hours(&in_scope, period, self.config.standard_hours_per_month);

        let gross_amounts = apply_rates(
            &classified.breakdown,
            &self.config,
            employee.base_hourly_rate,
            inputs.allowances,
        );

        let deduction_inputs = DeductionInputs {
            apartment_rent: employee.apartment_rent.unwrap_or(Decimal::ZERO),
            yukyu_days_approved: inputs.yukyu_days_approved,
            other: inputs.other_deductions,
        };
        let outcome = apply_deductions(
            gross_amounts.gross,
            &self.config,
            employee.base_hourly_rate,
            &deduction_inputs,
        );

        let mut validation = ValidationResult::default();
        for error in classified.errors {
            validation.add_error(error);
        }
        for warning in outcome.warnings {
            validation.add_warning(warning);
        }

        let mut amounts = gross_amounts;
        amounts.yukyu_credit = outcome.yukyu_credit;
        amounts.gross = outcome.gross;
        amounts.total_deductions = outcome.total_deductions;
        amounts.net = outcome.net;

        Ok(PayrollResult {
            calculation_id: Uuid::new_v4(),
            calculated_at: Utc::now(),
            employee_id: employee.id.clone(),
            period: period.clone(),
            hours: classified.breakdown,
            rates: resolve_rates(&self.config, employee.base_hourly_rate),
            amounts,
            deductions: outcome.deductions,
            validation,
        })
    }

    /// Calculates payroll for one employee by looking the data up through a
    /// [`PayrollDataSource`].
    ///
    /// Fails with [`EngineError::EmployeeNotFound`] before any computation
    /// if the employee is unknown.
    pub fn calculate_for(
        &self,
        source: &dyn PayrollDataSource,
        employee_id: &str,
        period: &PayPeriod,
    ) -> EngineResult<PayrollResult> {
        let employee =
            source
                .employee(employee_id)
                .ok_or_else(|| EngineError::EmployeeNotFound {
                    employee_id: employee_id.to_string(),
                })?;

        let records = source.time_records(employee_id, period);
        let inputs = CalculationInputs {
            yukyu_days_approved: source.approved_leave_days(employee_id, period),
            ..CalculationInputs::default()
        };

        self.calculate(&employee, &records, period, &inputs)
    }

    /// Runs the calculation for many employees.
    ///
    /// Each employee's slot holds either a result or that employee's error;
    /// a failure never aborts the rest of the batch.
    pub fn calculate_many(
        &self,
        source: &dyn PayrollDataSource,
        employee_ids: &[String],
        period: &PayPeriod,
    ) -> BatchResult {
        let results: Vec<EngineResult<PayrollResult>> = employee_ids
            .iter()
            .map(|id| self.calculate_for(source, id, period))
            .collect();

        let mut success_count = 0;
        let mut error_count = 0;
        let mut total_gross = Decimal::ZERO;
        let mut total_net = Decimal::ZERO;
        for result in &results {
            match result {
                Ok(payroll) => {
                    success_count += 1;
                    total_gross += payroll.amounts.gross;
                    total_net += payroll.amounts.net;
                }
                Err(_) => error_count += 1,
            }
        }

        BatchResult {
            results,
            success_count,
            error_count,
            total_gross,
            total_net,
        }
    }
}
