use serde::{Deserialize, Serialize};

/// Outcome of a payment-like operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Success,
    Redirect,
    Failed,
    Pending,
    Blocked,
}

/// Customer details echoed back in payment responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Refund state attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundInfo {
    pub status: bool,
    #[serde(default)]
    pub refund_date: Option<String>,
}

/// Chargeback state attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargebackInfo {
    pub status: bool,
    #[serde(default)]
    pub chargeback_date: Option<String>,
}

/// Base payment data shared by payout and status responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentData {
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub order_id: Option<String>,
    pub transaction_id: String,
    pub customer: CustomerInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_status_uses_uppercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Redirect).unwrap(),
            r#""REDIRECT""#
        );
        let status: PaymentStatus = serde_json::from_str(r#""BLOCKED""#).unwrap();
        assert_eq!(status, PaymentStatus::Blocked);
    }
}
