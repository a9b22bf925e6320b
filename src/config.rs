//! Client configuration: key validation, environment derivation and
//! base-URL normalization.

use bon::Builder;

use crate::errors::{Error, Result};

/// Prefix carried by sandbox credentials.
pub const TEST_KEY_PREFIX: &str = "PA_TEST_";
/// Prefix carried by production credentials.
pub const LIVE_KEY_PREFIX: &str = "PA_LIVE_";

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://backend.pay.agency";

/// Deployment mode, derived from the secret-key prefix. Selects endpoint
/// paths and mocked-vs-real behavior in the resource modules; never set
/// independently of the key.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Environment {
    Test,
    Live,
}

impl Environment {
    pub(crate) fn from_secret_key(secret_key: &str) -> Self {
        if secret_key.starts_with(LIVE_KEY_PREFIX) {
            Environment::Live
        } else {
            Environment::Test
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Test => "test",
            Environment::Live => "live",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client configuration, validated once at construction and immutable
/// afterwards.
#[derive(Builder, Debug, Clone)]
pub struct ClientConfig {
    /// 32-character key used for AES-256-CBC payload encryption.
    #[builder(into)]
    pub encryption_key: String,
    /// API secret key (`PA_TEST_` for test, `PA_LIVE_` for live). Sent
    /// verbatim as a bearer credential on every call.
    #[builder(into)]
    pub secret_key: String,
    /// API base URL. Defaults to [`DEFAULT_BASE_URL`]; normalized to
    /// `https://` with no trailing slash.
    #[builder(into)]
    pub base_url: Option<String>,
    /// Request timeout in seconds, applied to every request.
    #[builder(default = 15)]
    pub timeout_seconds: u64,
}

impl ClientConfig {
    /// Checks the key material. The encryption key must be exactly 32
    /// characters (character count, not bytes; the key is later encoded to
    /// bytes before use as an AES-256 key, so only single-byte-per-character
    /// keys are safe). The secret key must carry one of the two recognized
    /// environment prefixes.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.encryption_key.is_empty() || self.encryption_key.chars().count() != 32 {
            return Err(Error::config(
                "Encryption key must be exactly 32 characters long",
            ));
        }

        if self.secret_key.is_empty()
            || !(self.secret_key.starts_with(TEST_KEY_PREFIX)
                || self.secret_key.starts_with(LIVE_KEY_PREFIX))
        {
            return Err(Error::config(format!(
                "Secret key must start with '{TEST_KEY_PREFIX}' or '{LIVE_KEY_PREFIX}'"
            )));
        }

        Ok(())
    }

    pub(crate) fn environment(&self) -> Environment {
        Environment::from_secret_key(&self.secret_key)
    }
}

/// Strips trailing slashes and forces an `https://` scheme. Malformed hosts
/// are not rejected here; they surface later as network errors.
pub(crate) fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');

    if trimmed.starts_with("https://") {
        trimmed.to_owned()
    } else if let Some(rest) = trimmed.strip_prefix("http://") {
        format!("https://{rest}")
    } else {
        format!("https://{trimmed}")
    }
}
