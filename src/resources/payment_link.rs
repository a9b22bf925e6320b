//! Hosted payment-link operations.

use crate::{
    client::PayAgency,
    config::Environment,
    errors::Result,
    types::{PaymentLinkRequest, PaymentLinkResponse, PaymentTemplatesResponse},
};

const PAYMENT_LINK_ENDPOINT: &str = "/api/v1/payment-link";
const TEMPLATES_ENDPOINT: &str = "/api/v1/payment-templates";

/// Payment link operations.
#[derive(Debug, Clone, Copy)]
pub struct PaymentLink<'a> {
    pub(crate) client: &'a PayAgency,
}

impl PaymentLink<'_> {
    /// Creates a payment link. The server expects this body as plaintext
    /// JSON, so encryption is skipped.
    pub async fn create(&self, data: PaymentLinkRequest) -> Result<PaymentLinkResponse> {
        self.client.post_plain(PAYMENT_LINK_ENDPOINT, &data).await
    }

    /// Lists the merchant's checkout templates.
    ///
    /// In the test environment this short-circuits and returns an empty
    /// list without touching the network.
    pub async fn templates(&self) -> Result<PaymentTemplatesResponse> {
        if self.client.environment() == Environment::Test {
            tracing::debug!("test environment, returning empty template list");
            return Ok(PaymentTemplatesResponse { data: Vec::new() });
        }

        self.client.get(TEMPLATES_ENDPOINT, None).await
    }
}
