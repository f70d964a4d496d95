use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Payment,
    Refund,
    Chargeback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Succeeded,
    Failed,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Succeeded => "Succeeded",
            TransactionStatus::Failed => "Failed",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "warning",
            TransactionStatus::Succeeded => "success",
            TransactionStatus::Failed => "error",
        }
    }
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Payment => "Payment",
            TransactionKind::Refund => "Refund",
            TransactionKind::Chargeback => "Chargeback",
        }
    }
}

/// Payment provider transaction attached to an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub order_id: String,
    /// Provider reference (charge id, refund id, ...)
    pub reference: String,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub amount: f64,
    pub currency: String,
    /// Card brand, wallet name, etc.
    pub method: String,
    #[serde(default)]
    pub failure_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Amount with the sign it has for the shop balance
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Payment => self.amount,
            TransactionKind::Refund | TransactionKind::Chargeback => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refund_is_negative() {
        let tx: Transaction = serde_json::from_str(
            r#"{
                "id": "t-9",
                "orderId": "o-1",
                "reference": "re_123",
                "kind": "refund",
                "status": "succeeded",
                "amount": 12.5,
                "currency": "USD",
                "method": "visa",
                "createdAt": "2026-10-03T09:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(tx.signed_amount(), -12.5);
        assert_eq!(tx.status.label(), "Succeeded");
    }
}
