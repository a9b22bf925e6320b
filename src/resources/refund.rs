//! Refund operations.

use crate::{
    client::PayAgency,
    config::Environment,
    errors::Result,
    types::{RefundRequest, RefundResponse},
};

fn refund_endpoint(environment: Environment) -> &'static str {
    match environment {
        Environment::Test => "/api/v1/test/refund",
        Environment::Live => "/api/v1/live/refund",
    }
}

/// Refund operations.
#[derive(Debug, Clone, Copy)]
pub struct Refund<'a> {
    pub(crate) client: &'a PayAgency,
}

impl Refund<'_> {
    /// Processes a refund. The server expects this body as plaintext JSON,
    /// so encryption is skipped.
    pub async fn create(&self, data: RefundRequest) -> Result<RefundResponse> {
        let endpoint = refund_endpoint(self.client.environment());
        self.client.post_plain(endpoint, &data).await
    }
}
