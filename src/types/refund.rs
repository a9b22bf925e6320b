use bon::Builder;
use serde::{Deserialize, Serialize};

use super::common::{ChargebackInfo, CustomerInfo, RefundInfo};

/// Refund input. Sent as plaintext JSON, never encrypted.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct RefundRequest {
    #[builder(into)]
    pub reason: String,
    #[builder(into)]
    pub transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundResponseData {
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub order_id: Option<String>,
    pub transaction_id: String,
    pub customer: CustomerInfo,
    pub refund: RefundInfo,
    pub chargeback: ChargebackInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundResponse {
    /// `SUCCESS` for completed refunds.
    pub status: String,
    pub message: String,
    pub data: RefundResponseData,
}
