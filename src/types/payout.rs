use bon::Builder;
use serde::{Deserialize, Serialize};

use super::common::{PaymentData, PaymentStatus};

/// Card payout input.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct PayoutRequest {
    #[builder(into)]
    pub wallet_id: String,
    #[builder(into)]
    pub first_name: String,
    #[builder(into)]
    pub last_name: String,
    #[builder(into)]
    pub email: String,
    #[builder(into)]
    pub address: String,
    #[builder(into)]
    pub country: String,
    #[builder(into)]
    pub city: String,
    #[builder(into)]
    pub state: String,
    #[builder(into)]
    pub zip: String,
    #[builder(into)]
    pub ip_address: String,
    #[builder(into)]
    pub phone_number: String,
    pub amount: i64,
    #[builder(into)]
    pub currency: String,
    #[builder(into)]
    pub card_number: String,
    #[builder(into)]
    pub card_expiry_month: String,
    #[builder(into)]
    pub card_expiry_year: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutResponse {
    pub status: PaymentStatus,
    pub message: String,
    pub data: PaymentData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletStatus {
    Active,
    Inactive,
}

/// A merchant wallet that payouts can be drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub wallet_id: String,
    pub currency: String,
    pub amount: i64,
    pub payment_method: String,
    pub status: WalletStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletsResponse {
    pub data: Vec<WalletInfo>,
}

/// Payout fee estimation input.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct EstimateFeeRequest {
    #[builder(into)]
    pub wallet_id: String,
    pub amount: i64,
    #[builder(into)]
    pub card_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateFeeData {
    pub amount_required: i64,
    pub wallet_balance: i64,
    pub total_fee: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateFeeResponse {
    pub data: EstimateFeeData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutStatusResponse {
    pub status: PaymentStatus,
    pub message: String,
    pub data: PaymentData,
}
