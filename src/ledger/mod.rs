//! Paid-leave (yukyu) ledger.
//!
//! Balances track one employee's entitlement per fiscal year under a
//! conservation law (`granted == used + remaining + expired`); the ledger
//! mutates them through grant, LIFO use, idempotent expiry, manual
//! adjustment, and tenure-based auto-grant operations, emitting an
//! append-only transaction trail.

mod balance;
mod ledger;
mod transaction;

pub use balance::{BalanceStatus, YukyuBalance};
pub use ledger::{AutoGrantOutcome, YukyuLedger, entitlement_days};
pub use transaction::{YukyuTransaction, YukyuTransactionType};
