//! Crypto on-ramp, off-ramp and payin operations.

use crate::{
    client::PayAgency,
    config::Environment,
    errors::Result,
    types::{
        CryptoCurrenciesRequest, CryptoCurrenciesResponse, CryptoPaymentLinkRequest,
        CryptoPaymentRequest, CryptoPaymentResponse, CryptoPayinRequest, CryptoPayinResponse,
        OffRampLinkRequest, OffRampRequest, OnRampLinkRequest, OnRampRequest,
        PaymentLinkResponse, PayinLinkRequest,
    },
};

fn crypto_endpoint(environment: Environment) -> &'static str {
    match environment {
        Environment::Test => "/api/v1/test/crypto",
        Environment::Live => "/api/v1/live/crypto",
    }
}

fn payin_endpoint(environment: Environment) -> &'static str {
    match environment {
        Environment::Test => "/api/v1/test/crypto/payin",
        Environment::Live => "/api/v1/live/crypto/payin",
    }
}

fn currencies_endpoint(environment: Environment) -> &'static str {
    match environment {
        Environment::Test => "/api/v1/test/crypto/currencies",
        Environment::Live => "/api/v1/live/crypto/currencies",
    }
}

const PAYMENT_LINK_ENDPOINT: &str = "/api/v1/crypto/payment-link";

/// Cryptocurrency operations.
#[derive(Debug, Clone, Copy)]
pub struct Crypto<'a> {
    pub(crate) client: &'a PayAgency,
}

impl Crypto<'_> {
    /// Unified crypto payment; `transaction_type` on the request selects
    /// the on-ramp or off-ramp flow.
    pub async fn payment(&self, data: CryptoPaymentRequest) -> Result<CryptoPaymentResponse> {
        let endpoint = crypto_endpoint(self.client.environment());
        self.client.post_encrypted(endpoint, &data).await
    }

    /// Unified crypto payment link. The server expects this body as
    /// plaintext JSON, so encryption is skipped.
    pub async fn payment_link(
        &self,
        data: CryptoPaymentLinkRequest,
    ) -> Result<PaymentLinkResponse> {
        self.client.post_plain(PAYMENT_LINK_ENDPOINT, &data).await
    }

    /// On-ramp (fiat to crypto) transaction.
    pub async fn on_ramp(&self, data: OnRampRequest) -> Result<CryptoPaymentResponse> {
        self.payment(data.into()).await
    }

    /// Off-ramp (crypto to fiat) transaction.
    pub async fn off_ramp(&self, data: OffRampRequest) -> Result<CryptoPaymentResponse> {
        self.payment(data.into()).await
    }

    /// Creates an on-ramp payment link.
    pub async fn on_ramp_link(&self, data: OnRampLinkRequest) -> Result<PaymentLinkResponse> {
        self.payment_link(data.into()).await
    }

    /// Creates an off-ramp payment link.
    pub async fn off_ramp_link(&self, data: OffRampLinkRequest) -> Result<PaymentLinkResponse> {
        self.payment_link(data.into()).await
    }

    /// Creates a payin payment link.
    pub async fn payin_link(&self, data: PayinLinkRequest) -> Result<PaymentLinkResponse> {
        self.payment_link(data.into()).await
    }

    /// Direct crypto payin.
    pub async fn payin(&self, data: CryptoPayinRequest) -> Result<CryptoPayinResponse> {
        let endpoint = payin_endpoint(self.client.environment());
        self.client.post_encrypted(endpoint, &data).await
    }

    /// Lists supported currencies for a crypto exchange. The server expects
    /// this body as plaintext JSON, so encryption is skipped.
    pub async fn currencies(
        &self,
        data: CryptoCurrenciesRequest,
    ) -> Result<CryptoCurrenciesResponse> {
        let endpoint = currencies_endpoint(self.client.environment());
        self.client.post_plain(endpoint, &data).await
    }
}
