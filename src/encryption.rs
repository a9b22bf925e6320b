//! Outbound payload encryption.
//!
//! Wire format shared with the PayAgency backend: AES-256-CBC over the
//! UTF-8 plaintext with PKCS#7 padding, a fresh random 16-byte IV per call,
//! and both IV and ciphertext hex-encoded as `<iv>:<ciphertext>`. The
//! construction is not authenticated; integrity is the server's concern.
//! No decryption is offered, encryption is outbound-only.

use aes::cipher::{BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use rand::RngCore;

use crate::errors::{Error, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Encrypts `plaintext` under the 32-character `key`.
///
/// The output is non-deterministic across calls even for identical input:
/// the IV is freshly drawn each time. Reusing an IV under the same key
/// would be a cryptographic defect.
pub fn encrypt_payload(plaintext: &str, key: &str) -> Result<String> {
    let mut iv = [0u8; 16];
    rand::rng().fill_bytes(&mut iv);

    // Key length is validated in characters at construction; a key whose
    // UTF-8 encoding is not exactly 32 bytes is caught here instead.
    let encryptor = Aes256CbcEnc::new_from_slices(key.as_bytes(), &iv)
        .map_err(|_| Error::config("Encryption key must encode to exactly 32 bytes"))?;

    let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(format!("{}:{}", hex::encode(iv), hex::encode(ciphertext)))
}

#[cfg(test)]
mod tests {
    use aes::cipher::{BlockDecryptMut, KeyIvInit, block_padding::Pkcs7};

    use super::*;

    type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

    const KEY: &str = "0123456789abcdef0123456789abcdef";

    /// Test-only inverse of [`encrypt_payload`], built from the same
    /// algorithm.
    fn decrypt_payload(encrypted: &str, key: &str) -> String {
        let (iv_hex, cipher_hex) = encrypted.split_once(':').expect("missing ':' separator");
        let iv = hex::decode(iv_hex).expect("IV is not hex");
        let ciphertext = hex::decode(cipher_hex).expect("ciphertext is not hex");

        let plaintext = Aes256CbcDec::new_from_slices(key.as_bytes(), &iv)
            .expect("bad key or IV length")
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .expect("bad padding");

        String::from_utf8(plaintext).expect("plaintext is not UTF-8")
    }

    #[test]
    fn round_trips_block_boundary_lengths() {
        // 0, 1, one block, one block + 1, and a long body.
        for len in [0usize, 1, 16, 17, 1000] {
            let plaintext = "x".repeat(len);
            let encrypted = encrypt_payload(&plaintext, KEY).unwrap();
            assert_eq!(decrypt_payload(&encrypted, KEY), plaintext, "len {len}");
        }
    }

    #[test]
    fn output_shape_is_hex_iv_colon_hex_ciphertext() {
        let encrypted = encrypt_payload(r#"{"amount":100}"#, KEY).unwrap();
        let (iv_hex, cipher_hex) = encrypted.split_once(':').unwrap();

        assert_eq!(iv_hex.len(), 32);
        assert!(iv_hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(!cipher_hex.is_empty());
        assert_eq!(cipher_hex.len() % 32, 0);
        assert!(cipher_hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn block_aligned_plaintext_gains_a_full_padding_block() {
        // PKCS#7 always pads: 16 plaintext bytes become two ciphertext
        // blocks, never one.
        let encrypted = encrypt_payload(&"a".repeat(16), KEY).unwrap();
        let (_, cipher_hex) = encrypted.split_once(':').unwrap();
        assert_eq!(cipher_hex.len(), 2 * 16 * 2);
    }

    #[test]
    fn fresh_iv_every_call() {
        let plaintext = r#"{"card_number":"4242424242424242"}"#;
        let mut outputs = std::collections::HashSet::new();
        for _ in 0..32 {
            assert!(outputs.insert(encrypt_payload(plaintext, KEY).unwrap()));
        }
    }

    #[test]
    fn multibyte_key_is_rejected_at_encrypt_time() {
        // 32 characters but 64 UTF-8 bytes; passes character-count
        // validation, fails at the cipher boundary.
        let key = "é".repeat(32);
        let err = encrypt_payload("data", &key).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
