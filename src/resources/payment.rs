//! Card and alternative-payment-method operations.

use crate::{
    client::PayAgency,
    config::Environment,
    errors::Result,
    types::{ApmPaymentRequest, HostedPaymentRequest, PaymentResponse, S2sPaymentRequest},
};

fn card_endpoint(environment: Environment) -> &'static str {
    match environment {
        Environment::Test => "/api/v1/test/card",
        Environment::Live => "/api/v1/live/card",
    }
}

fn hosted_endpoint(environment: Environment) -> &'static str {
    match environment {
        Environment::Test => "/api/v1/test/hosted/card",
        Environment::Live => "/api/v1/live/hosted/card",
    }
}

fn apm_endpoint(environment: Environment) -> &'static str {
    match environment {
        Environment::Test => "/api/v1/test/apm",
        Environment::Live => "/api/v1/live/apm",
    }
}

/// Payment operations.
#[derive(Debug, Clone, Copy)]
pub struct Payment<'a> {
    pub(crate) client: &'a PayAgency,
}

impl Payment<'_> {
    /// Server-to-server card payment.
    pub async fn s2s(&self, data: S2sPaymentRequest) -> Result<PaymentResponse> {
        let endpoint = card_endpoint(self.client.environment());
        self.client.post_encrypted(endpoint, &data).await
    }

    /// Hosted checkout payment.
    pub async fn hosted(&self, data: HostedPaymentRequest) -> Result<PaymentResponse> {
        let endpoint = hosted_endpoint(self.client.environment());
        self.client.post_encrypted(endpoint, &data).await
    }

    /// Alternative payment method.
    pub async fn apm(&self, data: ApmPaymentRequest) -> Result<PaymentResponse> {
        let endpoint = apm_endpoint(self.client.environment());
        self.client.post_encrypted(endpoint, &data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_environment() {
        assert_eq!(card_endpoint(Environment::Test), "/api/v1/test/card");
        assert_eq!(card_endpoint(Environment::Live), "/api/v1/live/card");
        assert_eq!(hosted_endpoint(Environment::Test), "/api/v1/test/hosted/card");
        assert_eq!(hosted_endpoint(Environment::Live), "/api/v1/live/hosted/card");
        assert_eq!(apm_endpoint(Environment::Test), "/api/v1/test/apm");
        assert_eq!(apm_endpoint(Environment::Live), "/api/v1/live/apm");
    }
}
