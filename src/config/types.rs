//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed rate configuration that is
//! deserialized from per-company YAML files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Company policy for approved leave days inside a pay period.
///
/// The deduction cascade must expose both modes explicitly; the policy is
/// configured, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeavePolicy {
    /// Leave is unpaid: the value of approved leave days is deducted from an
    /// otherwise-monthly salary base.
    UnpaidDeducted,
    /// Leave is paid: approved leave days are credited into gross pay.
    Paid,
}

fn default_standard_daily_hours() -> Decimal {
    Decimal::new(8, 0)
}

/// The rate configuration for one company and effective-date range.
///
/// Immutable per calculation; owned by an external settings store and loaded
/// through [`ConfigLoader`](super::ConfigLoader).
///
/// # Example
///
/// ```
/// use payroll_engine::config::RateConfiguration;
///
/// let yaml = r#"
/// overtime_rate: "1.25"
/// night_rate: "1.25"
/// holiday_rate: "1.35"
/// sunday_rate: "1.35"
/// standard_hours_per_month: "160"
/// income_tax_rate: "5.0"
/// resident_tax_rate: "4.0"
/// health_insurance_rate: "5.0"
/// pension_rate: "9.15"
/// employment_insurance_rate: "0.6"
/// leave_policy: unpaid_deducted
/// "#;
/// let config: RateConfiguration = serde_yaml::from_str(yaml).unwrap();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfiguration {
    /// Multiplier for overtime hours (>= 1.0).
    pub overtime_rate: Decimal,
    /// Multiplier for night-window hours (>= 1.0).
    pub night_rate: Decimal,
    /// Multiplier for holiday hours (>= 1.0).
    pub holiday_rate: Decimal,
    /// Multiplier for Sunday hours (>= 1.0).
    pub sunday_rate: Decimal,
    /// Monthly threshold separating regular from overtime hours (> 0).
    pub standard_hours_per_month: Decimal,
    /// Hours valuing one leave day in the deduction cascade. Defaults to 8.
    #[serde(default = "default_standard_daily_hours")]
    pub standard_daily_hours: Decimal,
    /// Income tax percentage (0–100).
    pub income_tax_rate: Decimal,
    /// Resident tax percentage (0–100).
    pub resident_tax_rate: Decimal,
    /// Health insurance percentage (0–100).
    pub health_insurance_rate: Decimal,
    /// Pension percentage (0–100).
    pub pension_rate: Decimal,
    /// Employment insurance percentage (0–100).
    pub employment_insurance_rate: Decimal,
    /// How approved leave days affect pay.
    pub leave_policy: LeavePolicy,
}

impl RateConfiguration {
    /// Validates the configured ranges: multipliers >= 1.0, standard hours
    /// positive, percentages within 0–100.
    pub fn validate(&self) -> EngineResult<()> {
        let multipliers = [
            ("overtime_rate", self.overtime_rate),
            ("night_rate", self.night_rate),
            ("holiday_rate", self.holiday_rate),
            ("sunday_rate", self.sunday_rate),
        ];
        for (name, value) in multipliers {
            if value < Decimal::ONE {
                return Err(EngineError::CalculationError {
                    message: format!("{name} must be >= 1.0, got {value}"),
                });
            }
        }

        if self.standard_hours_per_month <= Decimal::ZERO {
            return Err(EngineError::CalculationError {
                message: format!(
                    "standard_hours_per_month must be positive, got {}",
                    self.standard_hours_per_month
                ),
            });
        }
        if self.standard_daily_hours <= Decimal::ZERO {
            return Err(EngineError::CalculationError {
                message: format!(
                    "standard_daily_hours must be positive, got {}",
                    self.standard_daily_hours
                ),
            });
        }

        let percentages = [
            ("income_tax_rate", self.income_tax_rate),
            ("resident_tax_rate", self.resident_tax_rate),
            ("health_insurance_rate", self.health_insurance_rate),
            ("pension_rate", self.pension_rate),
            ("employment_insurance_rate", self.employment_insurance_rate),
        ];
        for (name, value) in percentages {
            if value < Decimal::ZERO || value > Decimal::new(100, 0) {
                return Err(EngineError::CalculationError {
                    message: format!("{name} must be between 0 and 100, got {value}"),
                });
            }
        }

        Ok(())
    }
}
