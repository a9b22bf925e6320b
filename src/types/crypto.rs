use bon::Builder;
use serde::{Deserialize, Serialize};

use super::common::{CustomerInfo, PaymentStatus};

/// Direction of a crypto transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Fiat to crypto.
    OnRamp,
    /// Crypto to fiat.
    OffRamp,
    /// Direct crypto payin.
    PayIn,
}

/// Unified crypto payment input; `transaction_type` selects the on-ramp or
/// off-ramp flow. `fiat_amount` is required for ONRAMP, `crypto_amount` for
/// OFFRAMP.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct CryptoPaymentRequest {
    pub transaction_type: TransactionType,
    #[builder(into)]
    pub first_name: String,
    #[builder(into)]
    pub last_name: String,
    #[builder(into)]
    pub email: String,
    #[builder(into)]
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiat_amount: Option<i64>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_amount: Option<String>,
    #[builder(into)]
    pub fiat_currency: String,
    #[builder(into)]
    pub crypto_currency: String,
    #[builder(into)]
    pub wallet_address: String,
    #[builder(into)]
    pub ip_address: String,
    #[builder(into)]
    pub country: String,
    #[builder(into)]
    pub crypto_network: String,
    #[builder(into)]
    pub redirect_url: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
}

/// On-ramp (fiat to crypto) input; tagged ONRAMP before dispatch.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct OnRampRequest {
    #[builder(into)]
    pub first_name: String,
    #[builder(into)]
    pub last_name: String,
    #[builder(into)]
    pub email: String,
    #[builder(into)]
    pub phone_number: String,
    pub fiat_amount: i64,
    #[builder(into)]
    pub fiat_currency: String,
    #[builder(into)]
    pub crypto_currency: String,
    #[builder(into)]
    pub wallet_address: String,
    #[builder(into)]
    pub ip_address: String,
    #[builder(into)]
    pub country: String,
    #[builder(into)]
    pub crypto_network: String,
    #[builder(into)]
    pub redirect_url: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
}

impl From<OnRampRequest> for CryptoPaymentRequest {
    fn from(request: OnRampRequest) -> Self {
        CryptoPaymentRequest {
            transaction_type: TransactionType::OnRamp,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone_number: request.phone_number,
            fiat_amount: Some(request.fiat_amount),
            crypto_amount: None,
            fiat_currency: request.fiat_currency,
            crypto_currency: request.crypto_currency,
            wallet_address: request.wallet_address,
            ip_address: request.ip_address,
            country: request.country,
            crypto_network: request.crypto_network,
            redirect_url: request.redirect_url,
            webhook_url: request.webhook_url,
            order_id: request.order_id,
            terminal_id: request.terminal_id,
        }
    }
}

/// Off-ramp (crypto to fiat) input; tagged OFFRAMP before dispatch.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct OffRampRequest {
    #[builder(into)]
    pub first_name: String,
    #[builder(into)]
    pub last_name: String,
    #[builder(into)]
    pub email: String,
    #[builder(into)]
    pub phone_number: String,
    #[builder(into)]
    pub fiat_currency: String,
    #[builder(into)]
    pub crypto_currency: String,
    #[builder(into)]
    pub crypto_amount: String,
    #[builder(into)]
    pub wallet_address: String,
    #[builder(into)]
    pub ip_address: String,
    #[builder(into)]
    pub country: String,
    #[builder(into)]
    pub crypto_network: String,
    #[builder(into)]
    pub redirect_url: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
}

impl From<OffRampRequest> for CryptoPaymentRequest {
    fn from(request: OffRampRequest) -> Self {
        CryptoPaymentRequest {
            transaction_type: TransactionType::OffRamp,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone_number: request.phone_number,
            fiat_amount: None,
            crypto_amount: Some(request.crypto_amount),
            fiat_currency: request.fiat_currency,
            crypto_currency: request.crypto_currency,
            wallet_address: request.wallet_address,
            ip_address: request.ip_address,
            country: request.country,
            crypto_network: request.crypto_network,
            redirect_url: request.redirect_url,
            webhook_url: request.webhook_url,
            order_id: request.order_id,
            terminal_id: request.terminal_id,
        }
    }
}

/// Unified crypto payment-link input; sent as plaintext JSON.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct CryptoPaymentLinkRequest {
    pub transaction_type: TransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiat_amount: Option<i64>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_amount: Option<String>,
    #[builder(into)]
    pub fiat_currency: String,
    #[builder(into)]
    pub crypto_currency: String,
    #[builder(into)]
    pub payment_template_id: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

/// On-ramp payment-link input; tagged ONRAMP before dispatch.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct OnRampLinkRequest {
    pub fiat_amount: i64,
    #[builder(into)]
    pub fiat_currency: String,
    #[builder(into)]
    pub crypto_currency: String,
    #[builder(into)]
    pub payment_template_id: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

impl From<OnRampLinkRequest> for CryptoPaymentLinkRequest {
    fn from(request: OnRampLinkRequest) -> Self {
        CryptoPaymentLinkRequest {
            transaction_type: TransactionType::OnRamp,
            fiat_amount: Some(request.fiat_amount),
            crypto_amount: None,
            fiat_currency: request.fiat_currency,
            crypto_currency: request.crypto_currency,
            payment_template_id: request.payment_template_id,
            order_id: request.order_id,
            terminal_id: request.terminal_id,
            expiry_date: request.expiry_date,
        }
    }
}

/// Off-ramp payment-link input; tagged OFFRAMP before dispatch.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct OffRampLinkRequest {
    #[builder(into)]
    pub fiat_currency: String,
    #[builder(into)]
    pub crypto_currency: String,
    #[builder(into)]
    pub crypto_amount: String,
    #[builder(into)]
    pub payment_template_id: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

impl From<OffRampLinkRequest> for CryptoPaymentLinkRequest {
    fn from(request: OffRampLinkRequest) -> Self {
        CryptoPaymentLinkRequest {
            transaction_type: TransactionType::OffRamp,
            fiat_amount: None,
            crypto_amount: Some(request.crypto_amount),
            fiat_currency: request.fiat_currency,
            crypto_currency: request.crypto_currency,
            payment_template_id: request.payment_template_id,
            order_id: request.order_id,
            terminal_id: request.terminal_id,
            expiry_date: request.expiry_date,
        }
    }
}

/// Payin payment-link input; tagged PAYIN before dispatch.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct PayinLinkRequest {
    pub fiat_amount: i64,
    #[builder(into)]
    pub fiat_currency: String,
    #[builder(into)]
    pub crypto_currency: String,
    #[builder(into)]
    pub payment_template_id: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

impl From<PayinLinkRequest> for CryptoPaymentLinkRequest {
    fn from(request: PayinLinkRequest) -> Self {
        CryptoPaymentLinkRequest {
            transaction_type: TransactionType::PayIn,
            fiat_amount: Some(request.fiat_amount),
            crypto_amount: None,
            fiat_currency: request.fiat_currency,
            crypto_currency: request.crypto_currency,
            payment_template_id: request.payment_template_id,
            order_id: request.order_id,
            terminal_id: request.terminal_id,
            expiry_date: request.expiry_date,
        }
    }
}

/// Direct crypto payin input.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct CryptoPayinRequest {
    #[builder(into)]
    pub first_name: String,
    #[builder(into)]
    pub last_name: String,
    #[builder(into)]
    pub email: String,
    #[builder(into)]
    pub address: String,
    #[builder(into)]
    pub phone_number: String,
    #[builder(into)]
    pub ip_address: String,
    #[builder(into)]
    pub crypto_currency: String,
    pub amount: i64,
    #[builder(into)]
    pub currency: String,
    #[builder(into)]
    pub crypto_network: String,
    #[builder(into)]
    pub country: String,
    #[builder(into)]
    pub redirect_url: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
}

/// Supported-currencies lookup input. Sent as plaintext JSON.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct CryptoCurrenciesRequest {
    /// ISO 3166-1 alpha-2 country code.
    #[builder(into)]
    pub country: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoCurrency {
    pub name: String,
    pub code: String,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoCurrenciesResponse {
    pub message: String,
    pub data: Vec<CryptoCurrency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoPaymentResponseData {
    pub transaction_id: String,
    pub fiat: String,
    pub fiat_amount: i64,
    pub crypto: String,
    pub crypto_amount: i64,
    pub customer: CustomerInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoPaymentResponse {
    pub status: PaymentStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    pub data: CryptoPaymentResponseData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoPayinResponseData {
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub order_id: Option<String>,
    pub transaction_id: String,
    pub customer: CustomerInfo,
    pub crypto_currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoPayinResponse {
    pub status: PaymentStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    pub data: CryptoPayinResponseData,
}
