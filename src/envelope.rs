//! Shaping of the outbound request body.

use serde::Serialize;
use serde_json::Value;

use crate::{encryption, errors::Result};

/// The body actually sent over the wire.
///
/// Which variant is chosen is per-operation policy decided by the resource
/// dispatchers; callers never pick it per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestEnvelope {
    /// Plaintext JSON, for endpoints whose contract expects an unencrypted
    /// body.
    Plain(Value),
    /// Encrypted envelope: a single `payload` field holding
    /// `<iv hex>:<ciphertext hex>`.
    Encrypted { payload: String },
}

/// Shapes `data` into the wire body, encrypting unless told to skip.
///
/// The encrypted path serializes `data` to compact JSON (field insertion
/// order preserved) before handing it to the encryptor, so the byte
/// sequence fed into the cipher is reproducible for a given document.
pub(crate) fn prepare(data: Value, key: &str, skip_encryption: bool) -> Result<RequestEnvelope> {
    if skip_encryption {
        return Ok(RequestEnvelope::Plain(data));
    }

    let payload = encryption::encrypt_payload(&data.to_string(), key)?;

    Ok(RequestEnvelope::Encrypted { payload })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const KEY: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn skip_encryption_passes_data_through_unchanged() {
        let data = json!({"reason": "duplicate", "transaction_id": "TXN1"});
        let envelope = prepare(data.clone(), KEY, true).unwrap();
        assert_eq!(envelope, RequestEnvelope::Plain(data));
    }

    #[test]
    fn skip_path_never_reaches_the_encryptor() {
        // This key would fail at the cipher boundary, so success here shows
        // the skip path makes no encryption call at all.
        let bad_key = "only-nine";
        let data = json!({"payment_template_id": "TPL1"});

        let envelope = prepare(data.clone(), bad_key, true).unwrap();
        assert_eq!(envelope, RequestEnvelope::Plain(data.clone()));

        // The same key on the encrypting path does fail.
        assert!(prepare(data, bad_key, false).is_err());
    }

    #[test]
    fn encrypted_envelope_has_exactly_one_payload_field() {
        let envelope = prepare(json!({"amount": 100}), KEY, false).unwrap();

        let wire = serde_json::to_value(&envelope).unwrap();
        let object = wire.as_object().unwrap();
        assert_eq!(object.len(), 1);

        let payload = object["payload"].as_str().unwrap();
        let (iv_hex, cipher_hex) = payload.split_once(':').unwrap();
        assert_eq!(iv_hex.len(), 32);
        assert_eq!(cipher_hex.len() % 2, 0);
        assert!(payload.chars().all(|c| c.is_ascii_hexdigit() || c == ':'));
    }

    #[test]
    fn plain_envelope_serializes_as_the_raw_document() {
        let data = json!({"payment_template_id": "TPL1", "amount": 50});
        let envelope = prepare(data.clone(), KEY, true).unwrap();
        assert_eq!(serde_json::to_value(&envelope).unwrap(), data);
    }
}
