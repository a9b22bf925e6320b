//! Payout operations: creation, wallets, fee estimation and status.

use crate::{
    client::PayAgency,
    config::Environment,
    errors::Result,
    types::{
        EstimateFeeData, EstimateFeeRequest, EstimateFeeResponse, PayoutRequest, PayoutResponse,
        PayoutStatusResponse, WalletInfo, WalletStatus, WalletsResponse,
    },
};

fn payout_endpoint(environment: Environment) -> &'static str {
    match environment {
        Environment::Test => "/api/v1/test/payout",
        Environment::Live => "/api/v1/live/payout",
    }
}

fn payout_status_endpoint(environment: Environment, payout_reference: &str) -> String {
    match environment {
        Environment::Test => format!("/api/v1/test/payout/{payout_reference}/status"),
        Environment::Live => format!("/api/v1/live/payout/{payout_reference}/status"),
    }
}

const WALLETS_ENDPOINT: &str = "/api/v1/wallet";
const ESTIMATE_FEE_ENDPOINT: &str = "/api/v1/wallet/estimate-payout";

/// Payout operations.
#[derive(Debug, Clone, Copy)]
pub struct Payout<'a> {
    pub(crate) client: &'a PayAgency,
}

impl Payout<'_> {
    /// Creates a card payout.
    pub async fn create(&self, data: PayoutRequest) -> Result<PayoutResponse> {
        let endpoint = payout_endpoint(self.client.environment());
        self.client.post_encrypted(endpoint, &data).await
    }

    /// Lists the merchant's wallets.
    ///
    /// In the test environment this short-circuits and returns a fixed
    /// document without touching the network.
    pub async fn wallets(&self) -> Result<WalletsResponse> {
        if self.client.environment() == Environment::Test {
            tracing::debug!("test environment, returning mock wallets");
            return Ok(mock_wallets());
        }

        self.client.get(WALLETS_ENDPOINT, None).await
    }

    /// Estimates the fee for a payout.
    ///
    /// In the test environment this short-circuits and returns a fixed
    /// document without touching the network.
    pub async fn estimate_fee(&self, data: EstimateFeeRequest) -> Result<EstimateFeeResponse> {
        if self.client.environment() == Environment::Test {
            tracing::debug!("test environment, returning mock fee estimate");
            return Ok(mock_fee_estimate(&data));
        }

        self.client.post_encrypted(ESTIMATE_FEE_ENDPOINT, &data).await
    }

    /// Fetches the status of a payout by reference.
    pub async fn status(&self, payout_reference: &str) -> Result<PayoutStatusResponse> {
        let endpoint = payout_status_endpoint(self.client.environment(), payout_reference);
        self.client.get(&endpoint, None).await
    }
}

fn mock_wallets() -> WalletsResponse {
    WalletsResponse {
        data: vec![
            WalletInfo {
                wallet_id: "WAL7825818519632620".to_owned(),
                currency: "USD".to_owned(),
                amount: 2000,
                payment_method: "Card".to_owned(),
                status: WalletStatus::Active,
            },
            WalletInfo {
                wallet_id: "WAL9876543210123456".to_owned(),
                currency: "EUR".to_owned(),
                amount: 1500,
                payment_method: "Card".to_owned(),
                status: WalletStatus::Active,
            },
        ],
    }
}

fn mock_fee_estimate(data: &EstimateFeeRequest) -> EstimateFeeResponse {
    EstimateFeeResponse {
        data: EstimateFeeData {
            amount_required: data.amount,
            wallet_balance: 2000,
            // 3% fee, truncated
            total_fee: (data.amount as f64 * 0.03) as i64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_environment() {
        assert_eq!(payout_endpoint(Environment::Test), "/api/v1/test/payout");
        assert_eq!(payout_endpoint(Environment::Live), "/api/v1/live/payout");
        assert_eq!(
            payout_status_endpoint(Environment::Test, "PAYREF1"),
            "/api/v1/test/payout/PAYREF1/status"
        );
        assert_eq!(
            payout_status_endpoint(Environment::Live, "PAYREF1"),
            "/api/v1/live/payout/PAYREF1/status"
        );
    }

    #[test]
    fn mock_fee_estimate_charges_three_percent() {
        let request = EstimateFeeRequest::builder()
            .wallet_id("WAL1")
            .amount(1000)
            .card_number("4242424242424242")
            .build();

        let response = mock_fee_estimate(&request);
        assert_eq!(response.data.amount_required, 1000);
        assert_eq!(response.data.wallet_balance, 2000);
        assert_eq!(response.data.total_fee, 30);
    }

    #[test]
    fn mock_wallets_are_stable() {
        let wallets = mock_wallets();
        assert_eq!(wallets.data.len(), 2);
        assert_eq!(wallets.data[0].wallet_id, "WAL7825818519632620");
        assert_eq!(wallets.data[1].currency, "EUR");
    }
}
