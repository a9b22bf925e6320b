use bon::Builder;
use serde::{Deserialize, Serialize};

/// Transaction history query. All fields are optional; set ones become URL
/// query parameters.
#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct TransactionQuery {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_start_date: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_end_date: Option<String>,
    #[builder(into)]
    #[serde(rename = "nextCursor", skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    #[builder(into)]
    #[serde(rename = "prevCursor", skip_serializing_if = "Option::is_none")]
    pub prev_cursor: Option<String>,
}

impl TransactionQuery {
    /// Set fields as wire query parameters, `None` fields omitted.
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(value) = &self.transaction_start_date {
            params.push(("transaction_start_date", value.clone()));
        }
        if let Some(value) = &self.transaction_end_date {
            params.push(("transaction_end_date", value.clone()));
        }
        if let Some(value) = &self.next_cursor {
            params.push(("nextCursor", value.clone()));
        }
        if let Some(value) = &self.prev_cursor {
            params.push(("prevCursor", value.clone()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantConnector {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserKyc {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub user_kyc: UserKyc,
}

/// One row of transaction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInfo {
    pub first_name: String,
    pub last_name: String,
    pub converted_amount: String,
    pub converted_currency: String,
    pub transaction_id: String,
    pub amount: String,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub card_number: Option<String>,
    pub transaction_type: String,
    #[serde(default)]
    pub order_id: Option<String>,
    pub country: String,
    pub email: String,
    pub created_at: String,
    pub transaction_date: String,
    #[serde(default)]
    pub chargeback_date: Option<String>,
    #[serde(default)]
    pub refund_date: Option<String>,
    #[serde(default)]
    pub suspicious_date: Option<String>,
    pub merchant_connector: MerchantConnector,
    pub user: User,
}

/// Cursor-based pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionMeta {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "hasPreviousPage")]
    pub has_previous_page: bool,
    #[serde(default, rename = "nextCursor")]
    pub next_cursor: Option<String>,
    #[serde(default, rename = "prevCursor")]
    pub prev_cursor: Option<String>,
    /// Wire name kept as the server spells it.
    #[serde(rename = "totatCount")]
    pub total_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub message: String,
    pub data: Vec<TransactionInfo>,
    pub meta: TransactionMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_omit_unset_fields() {
        let query = TransactionQuery::builder()
            .transaction_start_date("2026-01-01")
            .next_cursor("abc")
            .build();

        assert_eq!(
            query.to_params(),
            vec![
                ("transaction_start_date", "2026-01-01".to_owned()),
                ("nextCursor", "abc".to_owned()),
            ]
        );
    }

    #[test]
    fn empty_query_yields_no_params() {
        assert!(TransactionQuery::default().to_params().is_empty());
    }
}
