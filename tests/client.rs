//! End-to-end behavior reachable through the public API alone.

use pay_agency::types::{EstimateFeeRequest, TransactionQuery};
use pay_agency::{ClientConfig, Environment, Error, PayAgency};

const ENC_KEY: &str = "0123456789abcdef0123456789abcdef";

/// Captures the debug-level events the mock short-circuit paths emit.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn client(secret_key: &str) -> PayAgency {
    PayAgency::new(
        ClientConfig::builder()
            .encryption_key(ENC_KEY)
            .secret_key(secret_key)
            .build(),
    )
    .unwrap()
}

#[test]
fn construction_derives_environment_from_secret_key_prefix() {
    assert_eq!(client("PA_TEST_abc").environment(), Environment::Test);
    assert_eq!(client("PA_LIVE_abc").environment(), Environment::Live);
}

#[test]
fn construction_rejects_bad_key_material() {
    let bad_encryption_key = PayAgency::new(
        ClientConfig::builder()
            .encryption_key("too-short")
            .secret_key("PA_TEST_abc")
            .build(),
    );
    assert!(matches!(
        bad_encryption_key.unwrap_err(),
        Error::Config { .. }
    ));

    let bad_secret_key = PayAgency::new(
        ClientConfig::builder()
            .encryption_key(ENC_KEY)
            .secret_key("sk_live_wrong_scheme")
            .build(),
    );
    assert!(matches!(bad_secret_key.unwrap_err(), Error::Config { .. }));
}

#[test]
fn base_url_defaults_and_normalizes() {
    assert_eq!(client("PA_TEST_abc").base_url(), "https://backend.pay.agency");

    let cases = [
        ("pay.agency", "https://pay.agency"),
        ("http://pay.agency", "https://pay.agency"),
        ("https://pay.agency/", "https://pay.agency"),
        ("https://pay.agency", "https://pay.agency"),
    ];
    for (configured, expected) in cases {
        let client = PayAgency::new(
            ClientConfig::builder()
                .encryption_key(ENC_KEY)
                .secret_key("PA_TEST_abc")
                .base_url(configured)
                .build(),
        )
        .unwrap();
        assert_eq!(client.base_url(), expected, "configured {configured:?}");
    }
}

#[tokio::test]
async fn test_environment_wallets_are_mocked_without_network() {
    init_tracing();
    // Unroutable base URL proves no request is made.
    let client = PayAgency::new(
        ClientConfig::builder()
            .encryption_key(ENC_KEY)
            .secret_key("PA_TEST_abc")
            .base_url("https://127.0.0.1:1")
            .timeout_seconds(2)
            .build(),
    )
    .unwrap();

    let wallets = client.payout().wallets().await.unwrap();
    assert_eq!(wallets.data.len(), 2);
    assert_eq!(wallets.data[0].wallet_id, "WAL7825818519632620");
    assert_eq!(wallets.data[0].amount, 2000);
    assert_eq!(wallets.data[1].currency, "EUR");
}

#[tokio::test]
async fn test_environment_fee_estimate_is_mocked_without_network() {
    init_tracing();
    let client = PayAgency::new(
        ClientConfig::builder()
            .encryption_key(ENC_KEY)
            .secret_key("PA_TEST_abc")
            .base_url("https://127.0.0.1:1")
            .timeout_seconds(2)
            .build(),
    )
    .unwrap();

    let estimate = client
        .payout()
        .estimate_fee(
            EstimateFeeRequest::builder()
                .wallet_id("WAL7825818519632620")
                .amount(500)
                .card_number("4242424242424242")
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(estimate.data.amount_required, 500);
    assert_eq!(estimate.data.wallet_balance, 2000);
    assert_eq!(estimate.data.total_fee, 15);
}

#[tokio::test]
async fn test_environment_templates_are_mocked_without_network() {
    init_tracing();
    let client = PayAgency::new(
        ClientConfig::builder()
            .encryption_key(ENC_KEY)
            .secret_key("PA_TEST_abc")
            .base_url("https://127.0.0.1:1")
            .timeout_seconds(2)
            .build(),
    )
    .unwrap();

    let templates = client.payment_link().templates().await.unwrap();
    assert!(templates.data.is_empty());
}

#[tokio::test]
async fn unreachable_host_surfaces_as_network_error() {
    let client = PayAgency::new(
        ClientConfig::builder()
            .encryption_key(ENC_KEY)
            .secret_key("PA_LIVE_abc")
            .base_url("https://127.0.0.1:1")
            .timeout_seconds(2)
            .build(),
    )
    .unwrap();

    let err = client
        .transactions()
        .list(Some(TransactionQuery::builder().next_cursor("c1").build()))
        .await
        .unwrap_err();

    match err {
        Error::Network { message } => assert!(message.starts_with("Network error:")),
        other => panic!("expected Network error, got {other:?}"),
    }
}
