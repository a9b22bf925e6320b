use bon::Builder;
use serde::{Deserialize, Serialize};

/// Payment link creation input. Sent as plaintext JSON, never encrypted.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct PaymentLinkRequest {
    #[builder(into)]
    pub payment_template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLinkResponse {
    pub message: String,
    /// The payment link URL.
    pub data: String,
}

/// A checkout template configured in the merchant dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTemplate {
    pub template_id: String,
    pub template_name: String,
    pub payment_template_id: String,
    pub template_screenshot: String,
    pub redirect_url: String,
    pub webhook_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTemplatesResponse {
    pub data: Vec<PaymentTemplate>,
}
