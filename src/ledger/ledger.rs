//! The yukyu ledger.
//!
//! This module implements the leave-balance state machine: grants, LIFO
//! consumption, idempotent expiry, manual adjustments, and tenure-based
//! auto-granting. All mutations run under one lock so concurrent callers
//! can never overdraw a balance, and every mutation is atomic — it either
//! fully succeeds or leaves the ledger untouched.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::{Mutex, MutexGuard};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeSnapshot;

use super::balance::{BalanceStatus, YukyuBalance};
use super::transaction::{YukyuTransaction, YukyuTransactionType};

/// The statutory entitlement schedule: months of service to granted days.
///
/// 10 days at 6 months of service, scaling to the statutory maximum of 20
/// days at 6.5 years.
const ENTITLEMENT_SCHEDULE: [(u32, i64); 7] = [
    (78, 20),
    (66, 18),
    (54, 16),
    (42, 14),
    (30, 12),
    (18, 11),
    (6, 10),
];

/// Returns the statutory leave entitlement for a given tenure, in days.
///
/// Employees with fewer than 6 months of service have no entitlement yet.
///
/// # Example
///
/// ```
/// use payroll_engine::ledger::entitlement_days;
/// use rust_decimal::Decimal;
///
/// assert_eq!(entitlement_days(5), Decimal::ZERO);
/// assert_eq!(entitlement_days(6), Decimal::new(10, 0));
/// assert_eq!(entitlement_days(80), Decimal::new(20, 0));
/// ```
pub fn entitlement_days(months_of_service: u32) -> Decimal {
    ENTITLEMENT_SCHEDULE
        .iter()
        .find(|(months, _)| months_of_service >= *months)
        .map(|(_, days)| Decimal::new(*days, 0))
        .unwrap_or(Decimal::ZERO)
}

/// The outcome of an auto-grant batch.
#[derive(Debug, Default)]
pub struct AutoGrantOutcome {
    /// Balances created, one per newly granted employee.
    pub granted: Vec<YukyuBalance>,
    /// Employees skipped because their tenure grants no days yet.
    pub skipped: Vec<String>,
    /// Per-employee failures, collected instead of aborting the batch.
    pub errors: Vec<(String, EngineError)>,
}

#[derive(Debug, Default)]
struct LedgerState {
    balances: Vec<YukyuBalance>,
    transactions: Vec<YukyuTransaction>,
}

/// Per-employee, per-fiscal-year leave balances with an append-only audit
/// trail.
///
/// The ledger operates on in-memory representations; persistence of
/// balances and transactions is the caller's responsibility. State is
/// guarded by a mutex so concurrent use/expire/adjust calls serialize and
/// the conservation law can never be violated by a race.
///
/// # Example
///
/// ```
/// use payroll_engine::ledger::YukyuLedger;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let ledger = YukyuLedger::new();
/// let grant_date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// ledger.grant("emp_001", 2024, Decimal::new(10, 0), grant_date, "annual grant")?;
///
/// let usage_date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
/// ledger.use_days("emp_001", Decimal::new(3, 0), usage_date, "summer leave")?;
///
/// assert_eq!(ledger.total_remaining("emp_001"), Decimal::new(7, 0));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Default)]
pub struct YukyuLedger {
    state: Mutex<LedgerState>,
}

impl YukyuLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the state, recovering from a poisoned lock (the ledger holds
    /// no invariants across a panic boundary that poisoning would protect).
    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Grants a new fiscal-year entitlement.
    ///
    /// Fails with [`EngineError::DuplicateGrant`] if any balance — active or
    /// expired — already exists for the employee and fiscal year.
    pub fn grant(
        &self,
        employee_id: &str,
        fiscal_year: i32,
        granted_days: Decimal,
        grant_date: NaiveDate,
        reason: &str,
    ) -> EngineResult<YukyuBalance> {
        if granted_days < Decimal::ZERO {
            return Err(EngineError::CalculationError {
                message: format!("granted_days must be >= 0, got {granted_days}"),
            });
        }

        let mut state = self.lock();
        if state
            .balances
            .iter()
            .any(|b| b.employee_id == employee_id && b.fiscal_year == fiscal_year)
        {
            return Err(EngineError::DuplicateGrant {
                employee_id: employee_id.to_string(),
                fiscal_year,
            });
        }

        let balance = YukyuBalance::granted(employee_id, fiscal_year, granted_days, grant_date);
        state.transactions.push(YukyuTransaction {
            id: Uuid::new_v4(),
            balance_id: balance.id,
            employee_id: employee_id.to_string(),
            transaction_type: YukyuTransactionType::Grant,
            transaction_date: grant_date,
            days: granted_days,
            description: reason.to_string(),
        });
        state.balances.push(balance.clone());

        info!(
            employee_id,
            fiscal_year,
            days = %granted_days,
            "Granted yukyu balance"
        );
        Ok(balance)
    }

    /// Consumes leave days, drawing from the newest-granted active balance
    /// first (LIFO) and continuing into older balances as needed.
    ///
    /// Emits one use transaction per balance touched and returns them.
    /// Fails atomically with [`EngineError::InsufficientBalance`] — no
    /// balance is mutated — when the employee's total remaining days fall
    /// short of the request.
    pub fn use_days(
        &self,
        employee_id: &str,
        days_to_use: Decimal,
        usage_date: NaiveDate,
        reason: &str,
    ) -> EngineResult<Vec<YukyuTransaction>> {
        if days_to_use <= Decimal::ZERO {
            return Err(EngineError::CalculationError {
                message: format!("days_to_use must be positive, got {days_to_use}"),
            });
        }

        let mut state = self.lock();

        let available: Decimal = state
            .balances
            .iter()
            .filter(|b| b.employee_id == employee_id && b.is_active())
            .map(|b| b.remaining_days)
            .sum();
        if available < days_to_use {
            warn!(
                employee_id,
                requested = %days_to_use,
                available = %available,
                "Rejected yukyu use: insufficient balance"
            );
            return Err(EngineError::InsufficientBalance {
                employee_id: employee_id.to_string(),
                requested: days_to_use,
                available,
            });
        }

        // Newest assigned_date first.
        let mut order: Vec<usize> = state
            .balances
            .iter()
            .enumerate()
            .filter(|(_, b)| {
                b.employee_id == employee_id && b.is_active() && b.remaining_days > Decimal::ZERO
            })
            .map(|(i, _)| i)
            .collect();
        order.sort_by(|&a, &b| {
            state.balances[b]
                .assigned_date
                .cmp(&state.balances[a].assigned_date)
        });

        let mut still_needed = days_to_use;
        let mut emitted = Vec::new();
        for index in order {
            if still_needed <= Decimal::ZERO {
                break;
            }
            let balance = &mut state.balances[index];
            let deducted = balance.remaining_days.min(still_needed);
            balance.used_days += deducted;
            balance.remaining_days -= deducted;
            still_needed -= deducted;

            emitted.push(YukyuTransaction {
                id: Uuid::new_v4(),
                balance_id: balance.id,
                employee_id: employee_id.to_string(),
                transaction_type: YukyuTransactionType::Use,
                transaction_date: usage_date,
                days: deducted,
                description: reason.to_string(),
            });
        }
        state.transactions.extend(emitted.iter().cloned());

        info!(
            employee_id,
            days = %days_to_use,
            balances_touched = emitted.len(),
            "Used yukyu days"
        );
        Ok(emitted)
    }

    /// Expires every active balance whose expiry date has passed as of the
    /// given date, forfeiting its remaining days.
    ///
    /// Returns the count of balances expired. Idempotent: a second call
    /// with the same date expires nothing further.
    pub fn expire(&self, as_of_date: NaiveDate) -> usize {
        let mut state = self.lock();

        let mut emitted = Vec::new();
        for balance in state
            .balances
            .iter_mut()
            .filter(|b| b.is_active() && b.expires_on <= as_of_date)
        {
            let forfeited = balance.remaining_days;
            balance.expired_days += forfeited;
            balance.remaining_days = Decimal::ZERO;
            balance.status = BalanceStatus::Expired;

            emitted.push(YukyuTransaction {
                id: Uuid::new_v4(),
                balance_id: balance.id,
                employee_id: balance.employee_id.clone(),
                transaction_type: YukyuTransactionType::Expire,
                transaction_date: as_of_date,
                days: forfeited,
                description: format!("expired on {}", balance.expires_on),
            });
        }

        let count = emitted.len();
        state.transactions.extend(emitted);

        if count > 0 {
            info!(as_of = %as_of_date, count, "Expired yukyu balances");
        }
        count
    }

    /// Applies a manual correction to one balance's granted and remaining
    /// days.
    ///
    /// `delta_days` may be negative but must not drive the remaining days
    /// below zero ([`EngineError::InvalidAdjustment`]). The adjustment goes
    /// directly to the matching balance, bypassing LIFO selection.
    pub fn adjust(
        &self,
        employee_id: &str,
        fiscal_year: i32,
        delta_days: Decimal,
        adjustment_date: NaiveDate,
        reason: &str,
    ) -> EngineResult<YukyuBalance> {
        let mut state = self.lock();

        let balance = state
            .balances
            .iter_mut()
            .find(|b| b.employee_id == employee_id && b.fiscal_year == fiscal_year)
            .ok_or_else(|| EngineError::BalanceNotFound {
                employee_id: employee_id.to_string(),
                fiscal_year,
            })?;

        if balance.remaining_days + delta_days < Decimal::ZERO {
            return Err(EngineError::InvalidAdjustment {
                employee_id: employee_id.to_string(),
                fiscal_year,
                message: format!(
                    "delta {delta_days} would drive remaining days below zero ({} remaining)",
                    balance.remaining_days
                ),
            });
        }

        balance.granted_days += delta_days;
        balance.remaining_days += delta_days;
        let adjusted = balance.clone();

        state.transactions.push(YukyuTransaction {
            id: Uuid::new_v4(),
            balance_id: adjusted.id,
            employee_id: employee_id.to_string(),
            transaction_type: YukyuTransactionType::Adjustment,
            transaction_date: adjustment_date,
            days: delta_days,
            description: reason.to_string(),
        });

        info!(
            employee_id,
            fiscal_year,
            delta = %delta_days,
            "Adjusted yukyu balance"
        );
        Ok(adjusted)
    }

    /// Grants tenure-based entitlements to every employee that has none for
    /// the fiscal year.
    ///
    /// Employees below 6 months of service are skipped; individual grant
    /// failures are collected in the outcome, never fatal to the batch.
    pub fn auto_grant(
        &self,
        employees: &[EmployeeSnapshot],
        fiscal_year: i32,
        grant_date: NaiveDate,
    ) -> AutoGrantOutcome {
        let mut outcome = AutoGrantOutcome::default();

        for employee in employees {
            let already_granted = {
                let state = self.lock();
                state
                    .balances
                    .iter()
                    .any(|b| b.employee_id == employee.id && b.fiscal_year == fiscal_year)
            };
            if already_granted {
                continue;
            }

            let days = entitlement_days(employee.months_of_service(grant_date));
            if days == Decimal::ZERO {
                outcome.skipped.push(employee.id.clone());
                continue;
            }

            match self.grant(&employee.id, fiscal_year, days, grant_date, "auto grant") {
                Ok(balance) => outcome.granted.push(balance),
                Err(error) => outcome.errors.push((employee.id.clone(), error)),
            }
        }

        info!(
            fiscal_year,
            granted = outcome.granted.len(),
            skipped = outcome.skipped.len(),
            errors = outcome.errors.len(),
            "Auto-grant completed"
        );
        outcome
    }

    /// Returns the employee's balances, oldest grant first.
    pub fn balances(&self, employee_id: &str) -> Vec<YukyuBalance> {
        let state = self.lock();
        let mut balances: Vec<YukyuBalance> = state
            .balances
            .iter()
            .filter(|b| b.employee_id == employee_id)
            .cloned()
            .collect();
        balances.sort_by_key(|b| b.assigned_date);
        balances
    }

    /// Returns the employee's transactions in emission order.
    pub fn transactions(&self, employee_id: &str) -> Vec<YukyuTransaction> {
        let state = self.lock();
        state
            .transactions
            .iter()
            .filter(|t| t.employee_id == employee_id)
            .cloned()
            .collect()
    }

    /// Returns the employee's total remaining days across active balances,
    /// the figure the deduction cascade consumes.
    pub fn total_remaining(&self, employee_id: &str) -> Decimal {
        let state = self.lock();
        state
            .balances
            .iter()
            .filter(|b| b.employee_id == employee_id && b.is_active())
            .map(|b| b.remaining_days)
            .sum()
    }
}
