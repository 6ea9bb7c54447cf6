//! Typed statement transaction, as extracted from a statement table.

use serde::{Deserialize, Serialize};

/// One statement row (plus any merged continuation rows).
///
/// In a well-formed statement at most one of `debit`/`credit` is non-zero;
/// this is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The date token exactly as it appeared in the table, or an empty
    /// string when the token did not parse as a date.
    pub date: String,
    pub details: String,
    pub debit: f64,
    pub credit: f64,
    /// Running account balance after this transaction.
    pub balance: f64,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        details: impl Into<String>,
        debit: f64,
        credit: f64,
        balance: f64,
    ) -> Self {
        Self {
            date: date.into(),
            details: details.into(),
            debit,
            credit,
            balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_plain_field_names() {
        let txn = Transaction::new("2024-01-05", "UPI/Payment to X", 100.0, 0.0, 900.0);
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["date"], "2024-01-05");
        assert_eq!(json["details"], "UPI/Payment to X");
        assert_eq!(json["debit"], 100.0);
        assert_eq!(json["credit"], 0.0);
        assert_eq!(json["balance"], 900.0);
    }
}
