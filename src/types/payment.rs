use bon::Builder;
use serde::{Deserialize, Serialize};

use super::common::{ChargebackInfo, CustomerInfo, PaymentStatus, RefundInfo};

/// Server-to-server card payment input.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct S2sPaymentRequest {
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
    pub card_cvv: String,
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

/// Hosted checkout payment input. Card details are collected on the hosted
/// page, not passed here.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct HostedPaymentRequest {
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

/// Alternative payment method input.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct ApmPaymentRequest {
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

/// Payment data carried in a card/APM payment response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponseData {
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
pub struct PaymentResponse {
    pub status: PaymentStatus,
    pub message: String,
    pub data: PaymentResponseData,
    /// Present when `status` is `REDIRECT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_are_omitted_from_the_wire_body() {
        let request = S2sPaymentRequest::builder()
            .first_name("Jane")
            .last_name("Doe")
            .email("jane@example.com")
            .address("1 Main St")
            .country("GB")
            .city("London")
            .state("LND")
            .zip("E1 6AN")
            .ip_address("203.0.113.7")
            .phone_number("+447700900000")
            .amount(100)
            .currency("GBP")
            .card_number("4242424242424242")
            .card_expiry_month("12")
            .card_expiry_year("2030")
            .card_cvv("123")
            .redirect_url("https://merchant.example/return")
            .build();

        let wire = serde_json::to_value(&request).unwrap();
        let object = wire.as_object().unwrap();
        assert!(!object.contains_key("webhook_url"));
        assert!(!object.contains_key("order_id"));
        assert!(!object.contains_key("terminal_id"));
        assert_eq!(object["amount"], 100);
    }

    #[test]
    fn field_order_follows_declaration_order() {
        let request = HostedPaymentRequest::builder()
            .first_name("Jane")
            .last_name("Doe")
            .email("jane@example.com")
            .address("1 Main St")
            .country("GB")
            .city("London")
            .state("LND")
            .zip("E1 6AN")
            .ip_address("203.0.113.7")
            .phone_number("+447700900000")
            .amount(100)
            .currency("GBP")
            .redirect_url("https://merchant.example/return")
            .build();

        let compact = serde_json::to_string(&request).unwrap();
        assert!(compact.starts_with(r#"{"first_name":"Jane","last_name":"Doe""#));
    }
}
