//! The PayAgency client and its HTTP transport.

use std::time::Duration;

use http::{
    HeaderMap, HeaderValue, Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    config::{ClientConfig, DEFAULT_BASE_URL, Environment, normalize_base_url},
    envelope::{self, RequestEnvelope},
    errors::{Error, Result},
    resources::{Crypto, Payment, PaymentLink, Payout, Refund, Transaction},
    types::{RefundRequest, RefundResponse},
};

/// The PayAgency API client.
///
/// Construction validates the key material and fails with
/// [`Error::Config`] on bad input; a constructed client is immutable and
/// safe to share across tasks (the underlying `reqwest::Client` is cheaply
/// cloneable and supports concurrent use).
#[derive(Debug, Clone)]
pub struct PayAgency {
    config: ClientConfig,
    environment: Environment,
    base_url: String,
    http: reqwest::Client,
}

impl PayAgency {
    /// Builds a client from a validated configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let environment = config.environment();
        let base_url = match config.base_url.as_deref() {
            Some(url) => normalize_base_url(url),
            None => DEFAULT_BASE_URL.to_owned(),
        };
        let http = build_http_client(&config)?;

        Ok(PayAgency {
            config,
            environment,
            base_url,
            http,
        })
    }

    /// The environment derived from the secret-key prefix.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The normalized base URL all endpoint paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Card payment operations.
    pub fn payment(&self) -> Payment<'_> {
        Payment { client: self }
    }

    /// Payout operations.
    pub fn payout(&self) -> Payout<'_> {
        Payout { client: self }
    }

    /// Payment link operations.
    pub fn payment_link(&self) -> PaymentLink<'_> {
        PaymentLink { client: self }
    }

    /// Cryptocurrency operations.
    pub fn crypto(&self) -> Crypto<'_> {
        Crypto { client: self }
    }

    /// Transaction history operations.
    pub fn transactions(&self) -> Transaction<'_> {
        Transaction { client: self }
    }

    /// Refund operations.
    pub fn refunds(&self) -> Refund<'_> {
        Refund { client: self }
    }

    /// Processes a refund. Shorthand for `refunds().create(..)`.
    pub async fn refund(&self, data: RefundRequest) -> Result<RefundResponse> {
        self.refunds().create(data).await
    }

    /// POST with the standard encrypted envelope.
    pub(crate) async fn post_encrypted<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let envelope = self.prepare_body(body, false)?;
        self.request(Method::POST, endpoint, Some(envelope), None)
            .await
    }

    /// POST with a plaintext JSON body, for endpoints whose contract skips
    /// encryption.
    pub(crate) async fn post_plain<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let envelope = self.prepare_body(body, true)?;
        self.request(Method::POST, endpoint, Some(envelope), None)
            .await
    }

    pub(crate) async fn get<T>(
        &self,
        endpoint: &str,
        query: Option<Vec<(&'static str, String)>>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, endpoint, None, query).await
    }

    fn prepare_body<B: Serialize>(&self, body: &B, skip_encryption: bool) -> Result<RequestEnvelope> {
        let document = serde_json::to_value(body)
            .map_err(|e| Error::config(format!("Request body is not valid JSON: {e}")))?;
        envelope::prepare(document, &self.config.encryption_key, skip_encryption)
    }

    /// Issues one HTTP request and normalizes the outcome: parsed JSON on
    /// success, [`Error::Api`] for status >= 400 or unreadable bodies,
    /// [`Error::Network`] when no HTTP response was received. Nothing is
    /// retried.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<RequestEnvelope>,
        query: Option<Vec<(&'static str, String)>>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("{method} {url}");

        let mut request = self.http.request(method, &url);
        if let Some(query) = &query {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(Error::network)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(Error::network)?;

        if status >= 400 {
            let (message, raw) = match serde_json::from_str::<Value>(&text) {
                Ok(parsed) => {
                    // A present `message` is passed through even when it is
                    // not a string; the generic fallback is only for bodies
                    // without one.
                    let message = match parsed.get("message") {
                        Some(Value::String(message)) => message.clone(),
                        Some(other) => other.to_string(),
                        None => format!("HTTP {status} error"),
                    };
                    (message, parsed)
                }
                Err(_) => {
                    let message = if text.is_empty() {
                        "Unknown error".to_owned()
                    } else {
                        text.clone()
                    };
                    (message.clone(), serde_json::json!({ "message": message }))
                }
            };

            tracing::debug!("API error {status}: {message}");
            return Err(Error::Api {
                message,
                status_code: status,
                raw: Some(raw),
            });
        }

        serde_json::from_str(&text).map_err(|_| Error::Api {
            message: "Invalid JSON response from server".to_owned(),
            status_code: status,
            raw: Some(serde_json::json!({ "raw_response": text })),
        })
    }
}

fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.secret_key))
        .map_err(|_| Error::config("Secret key contains characters not allowed in a header"))?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| Error::config(format!("Failed to initialize HTTP transport: {e}")))
}
