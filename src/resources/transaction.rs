//! Transaction history operations.

use crate::{
    client::PayAgency,
    config::Environment,
    errors::Result,
    types::{TransactionQuery, TransactionsResponse},
};

fn transactions_endpoint(environment: Environment) -> &'static str {
    match environment {
        Environment::Test => "/api/v1/test-transactions",
        Environment::Live => "/api/v1/live-transactions",
    }
}

fn wallet_transactions_endpoint(environment: Environment) -> &'static str {
    match environment {
        Environment::Test => "/api/v1/test-wallet-transactions",
        Environment::Live => "/api/v1/live-wallet-transactions",
    }
}

/// Transaction history operations.
#[derive(Debug, Clone, Copy)]
pub struct Transaction<'a> {
    pub(crate) client: &'a PayAgency,
}

impl Transaction<'_> {
    /// Fetches transaction history, optionally filtered and paginated.
    pub async fn list(&self, query: Option<TransactionQuery>) -> Result<TransactionsResponse> {
        let endpoint = transactions_endpoint(self.client.environment());
        self.client.get(endpoint, query.map(|q| q.to_params())).await
    }

    /// Fetches wallet transaction history, optionally filtered and
    /// paginated.
    pub async fn wallet_list(
        &self,
        query: Option<TransactionQuery>,
    ) -> Result<TransactionsResponse> {
        let endpoint = wallet_transactions_endpoint(self.client.environment());
        self.client.get(endpoint, query.map(|q| q.to_params())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_environment() {
        assert_eq!(
            transactions_endpoint(Environment::Test),
            "/api/v1/test-transactions"
        );
        assert_eq!(
            transactions_endpoint(Environment::Live),
            "/api/v1/live-transactions"
        );
        assert_eq!(
            wallet_transactions_endpoint(Environment::Test),
            "/api/v1/test-wallet-transactions"
        );
        assert_eq!(
            wallet_transactions_endpoint(Environment::Live),
            "/api/v1/live-wallet-transactions"
        );
    }
}
