//! Yukyu transaction model.
//!
//! Transactions are the append-only audit trail of the ledger. Every
//! mutation of a balance emits at least one transaction; a single use
//! operation spanning multiple balances emits one per balance touched.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of ledger mutation a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YukyuTransactionType {
    /// A new entitlement was granted.
    Grant,
    /// Days were consumed from a balance.
    Use,
    /// Remaining days were forfeited at expiry.
    Expire,
    /// A manual correction to a balance.
    Adjustment,
}

impl std::fmt::Display for YukyuTransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YukyuTransactionType::Grant => write!(f, "grant"),
            YukyuTransactionType::Use => write!(f, "use"),
            YukyuTransactionType::Expire => write!(f, "expire"),
            YukyuTransactionType::Adjustment => write!(f, "adjustment"),
        }
    }
}

/// One immutable audit record.
///
/// `days` is signed: positive for grants and increasing adjustments,
/// negative for decreasing adjustments; use and expire transactions carry
/// the positive magnitude of the deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YukyuTransaction {
    /// Unique identifier for this transaction.
    pub id: Uuid,
    /// The balance this transaction touched.
    pub balance_id: Uuid,
    /// The employee the balance belongs to.
    pub employee_id: String,
    /// The kind of mutation.
    pub transaction_type: YukyuTransactionType,
    /// The business date of the mutation.
    pub transaction_date: NaiveDate,
    /// The day delta or magnitude (see type-level docs).
    pub days: Decimal,
    /// Free-text reason supplied by the caller.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_display() {
        assert_eq!(YukyuTransactionType::Grant.to_string(), "grant");
        assert_eq!(YukyuTransactionType::Use.to_string(), "use");
        assert_eq!(YukyuTransactionType::Expire.to_string(), "expire");
        assert_eq!(YukyuTransactionType::Adjustment.to_string(), "adjustment");
    }

    #[test]
    fn test_transaction_serialization() {
        let transaction = YukyuTransaction {
            id: Uuid::nil(),
            balance_id: Uuid::nil(),
            employee_id: "emp_001".to_string(),
            transaction_type: YukyuTransactionType::Use,
            transaction_date: NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
            days: Decimal::new(2, 0),
            description: "summer leave".to_string(),
        };

        let json = serde_json::to_string(&transaction).unwrap();
        assert!(json.contains("\"transaction_type\":\"use\""));
        assert!(json.contains("\"days\":\"2\""));

        let deserialized: YukyuTransaction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, transaction);
    }
}
