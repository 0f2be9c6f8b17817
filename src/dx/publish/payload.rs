//! Publish payload module.
//!
//! This module contains the [`EncodedPayload`] type which holds the message in
//! the form it will be put on the wire.

use crate::core::{CryptoProvider, PubNubError, Serialize};
use base64::{engine::general_purpose, Engine as _};

pub(crate) const NULL: &str = "null";

/// Serialized message and its optional ciphertext.
///
/// `cipher_json` is set only when the message has been encrypted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    /// Message serialized to JSON.
    pub raw_json: String,

    /// Base64 encoded ciphertext of [`raw_json`](EncodedPayload::raw_json).
    pub cipher_json: Option<String>,
}

impl EncodedPayload {
    /// Serialize `message` and encrypt it when `cryptor` is provided.
    ///
    /// # Errors
    /// Returns [`PubNubError::InvalidArgument`] when the message can't be
    /// serialized or serializes to `null`, and [`PubNubError::Encryption`]
    /// when it can't be encrypted.
    pub fn encode<M>(message: M, cryptor: Option<&dyn CryptoProvider>) -> Result<Self, PubNubError>
    where
        M: Serialize,
    {
        let raw_json = encode_value(message)
            .map_err(|err| PubNubError::invalid_argument(format!("Message: {err}")))?;

        // `serde_json` writes `None`, unit and non-finite floats as `null`.
        if raw_json == NULL {
            return Err(PubNubError::invalid_argument("Message can't be empty"));
        }

        let cipher_json = cryptor
            .map(|cryptor| encrypt_payload(&raw_json, cryptor))
            .transpose()?;

        Ok(Self {
            raw_json,
            cipher_json,
        })
    }

    /// Ciphertext as a JSON string literal or the message JSON as is.
    pub(crate) fn wire_json(&self) -> String {
        match &self.cipher_json {
            Some(cipher) => format!("\"{cipher}\""),
            None => self.raw_json.clone(),
        }
    }
}

/// Serialize any value into its JSON string form.
pub(crate) fn encode_value<V>(value: V) -> Result<String, PubNubError>
where
    V: Serialize,
{
    String::from_utf8(value.serialize()?).map_err(|err| PubNubError::Serialization {
        details: err.to_string(),
    })
}

/// Encrypt serialized message and encode the result with base64.
///
/// Line breaks are removed from the encoded ciphertext.
pub(crate) fn encrypt_payload(
    raw_json: &str,
    cryptor: &dyn CryptoProvider,
) -> Result<String, PubNubError> {
    cryptor
        .encrypt(raw_json.as_bytes().to_vec())
        .map(|encrypted| general_purpose::STANDARD.encode(encrypted).replace('\n', ""))
}

#[cfg(test)]
mod should {
    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    #[derive(Debug)]
    struct XorCryptor;

    impl CryptoProvider for XorCryptor {
        fn encrypt(&self, data: Vec<u8>) -> Result<Vec<u8>, PubNubError> {
            Ok(data.iter().map(|byte| byte ^ 0x5a).collect())
        }

        fn decrypt(&self, data: Vec<u8>) -> Result<Vec<u8>, PubNubError> {
            self.encrypt(data)
        }
    }

    #[derive(Debug)]
    struct FailingCryptor;

    impl CryptoProvider for FailingCryptor {
        fn encrypt(&self, _data: Vec<u8>) -> Result<Vec<u8>, PubNubError> {
            Err(PubNubError::Encryption {
                details: "boom".into(),
            })
        }

        fn decrypt(&self, data: Vec<u8>) -> Result<Vec<u8>, PubNubError> {
            Ok(data)
        }
    }

    #[test]
    fn encode_message_without_cryptor() {
        let payload = EncodedPayload::encode(HashMap::from([("foo", "bar")]), None).unwrap();

        assert_eq!(payload.raw_json, "{\"foo\":\"bar\"}");
        assert_eq!(payload.cipher_json, None);
        assert_eq!(payload.wire_json(), "{\"foo\":\"bar\"}");
    }

    #[test]
    fn encode_message_with_cryptor() {
        let payload = EncodedPayload::encode("Hello", Some(&XorCryptor)).unwrap();
        let cipher = payload.cipher_json.clone().unwrap();

        assert_eq!(payload.raw_json, "\"Hello\"");
        assert!(!cipher.contains('\n'));
        assert!(!cipher.contains("Hello"));
        assert_eq!(payload.wire_json(), format!("\"{cipher}\""));
    }

    #[test]
    fn return_invalid_argument_for_unserializable_message() {
        let message = HashMap::from([((1, 2), "value")]);

        assert!(matches!(
            EncodedPayload::encode(message, None),
            Err(PubNubError::InvalidArgument { .. })
        ));
    }

    #[test_case(EncodedPayload::encode(serde_json::Value::Null, None) ; "null value")]
    #[test_case(EncodedPayload::encode(Option::<String>::None, None) ; "absent optional")]
    #[test_case(EncodedPayload::encode(f64::NAN, Some(&XorCryptor)) ; "not a number")]
    #[test_case(EncodedPayload::encode(f64::INFINITY, None) ; "infinity")]
    fn return_invalid_argument_for_null_message(result: Result<EncodedPayload, PubNubError>) {
        assert_eq!(
            result,
            Err(PubNubError::InvalidArgument {
                details: "Message can't be empty".into()
            })
        );
    }

    #[test]
    fn pass_encryption_error_through() {
        assert!(matches!(
            EncodedPayload::encode("Hello", Some(&FailingCryptor)),
            Err(PubNubError::Encryption { .. })
        ));
    }

    #[cfg(feature = "crypto")]
    #[test]
    fn encrypt_with_aes_cbc() {
        use crate::providers::crypto_aescbc::{AesCbcCrypto, AesCbcIv};

        let cryptor = AesCbcCrypto::new("enigma", AesCbcIv::Constant).unwrap();

        assert_eq!(
            encrypt_payload("{\"foo\":\"bar\"}", &cryptor).unwrap(),
            "qgMLd0PI174J/5U/ZAqE4Q=="
        );
    }
}
