//! # AES-CBC Crypto Implementation
//!
//! This module contains [`AesCbcCrypto`] and [`AesCbcIv`] types.
//! It is used to encrypt messages before they are published to the
//! [`PubNub API`] using the [`aes`] and [`cbc`] crates.
//!
//! It requires the [`crypto` feature] to be enabled.
//!
//! [`PubNub API`]: https://www.pubnub.com/docs
//! [`aes`]: https://crates.io/crates/aes
//! [`cbc`]: https://crates.io/crates/cbc
//! [`crypto` feature]: ../../index.html#features

use crate::core::{CryptoProvider, PubNubError};
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use sha2::{Digest, Sha256};

type Encryptor = cbc::Encryptor<aes::Aes256>;
type Decryptor = cbc::Decryptor<aes::Aes256>;

/// AES cipher block size.
pub(crate) const AES_BLOCK_SIZE: usize = 16;

/// Initialization vector shared by every client which doesn't use random
/// vectors.
const CONSTANT_IV: &[u8; AES_BLOCK_SIZE] = b"0123456789012345";

/// AES block cipher initialization vector.
///
/// It is intended to be used with [`AesCbcCrypto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AesCbcIv {
    /// Hard-coded initialization vector.
    ///
    /// The same vector is used for each [`encrypt`] and [`decrypt`] call, so
    /// equal messages produce equal ciphertext.
    ///
    /// [`encrypt`]: AesCbcCrypto::encrypt
    /// [`decrypt`]: AesCbcCrypto::decrypt
    #[default]
    Constant,

    /// Random initialization vector.
    ///
    /// A new vector is generated with each [`encrypt`] call and prepended to
    /// the ciphertext.
    ///
    /// [`encrypt`]: AesCbcCrypto::encrypt
    Random,
}

impl From<bool> for AesCbcIv {
    /// `true` selects [`AesCbcIv::Random`].
    fn from(use_random_iv: bool) -> Self {
        if use_random_iv {
            AesCbcIv::Random
        } else {
            AesCbcIv::Constant
        }
    }
}

/// A crypto that uses the AES encryption algorithm with CBC mode.
///
/// The cipher key is the first 32 hex characters of the SHA-256 digest of the
/// user provided key.
///
/// # Examples
/// ```rust
/// # use pubnub_publish::{
/// #     core::{CryptoProvider, PubNubError},
/// #     providers::crypto_aescbc::{AesCbcIv, AesCbcCrypto}
/// # };
/// #
/// # fn main() -> Result<(), PubNubError> {
/// let cryptor = AesCbcCrypto::new("enigma", AesCbcIv::Random)?;
/// let encrypted = cryptor.encrypt(b"\"Hello\"".to_vec())?;
/// assert_eq!(cryptor.decrypt(encrypted)?, b"\"Hello\"".to_vec());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AesCbcCrypto {
    cipher_key: Vec<u8>,
    iv: AesCbcIv,
}

impl AesCbcCrypto {
    /// Create an AES-CBC crypto for data encryption and decryption.
    ///
    /// # Errors
    /// Returns [`PubNubError::CryptoInitialization`] if the cipher key is
    /// empty.
    pub fn new<C, I>(cipher_key: C, iv: I) -> Result<Self, PubNubError>
    where
        C: Into<Vec<u8>>,
        I: Into<AesCbcIv>,
    {
        let cipher_key: Vec<u8> = cipher_key.into();

        if cipher_key.is_empty() {
            return Err(PubNubError::CryptoInitialization {
                details: "Cipher key is empty".into(),
            });
        }

        Ok(AesCbcCrypto {
            cipher_key: sha256_hex(&cipher_key),
            iv: iv.into(),
        })
    }

    fn encryption_iv(&self) -> Result<[u8; AES_BLOCK_SIZE], PubNubError> {
        match self.iv {
            AesCbcIv::Constant => Ok(*CONSTANT_IV),
            AesCbcIv::Random => {
                let mut random = [0u8; AES_BLOCK_SIZE];
                getrandom::getrandom(&mut random).map_err(|err| PubNubError::Encryption {
                    details: err.to_string(),
                })?;
                Ok(random)
            }
        }
    }

    /// Split received data into initialization vector and ciphertext.
    fn split_iv<'a>(&self, data: &'a [u8]) -> Result<(&'a [u8], &'a [u8]), PubNubError> {
        match self.iv {
            AesCbcIv::Constant => Ok((CONSTANT_IV.as_slice(), data)),
            AesCbcIv::Random if data.len() > AES_BLOCK_SIZE => Ok(data.split_at(AES_BLOCK_SIZE)),
            AesCbcIv::Random => Err(PubNubError::Decryption {
                details: "Data is too short to contain initialization vector".into(),
            }),
        }
    }
}

/// Hex encoded SHA-256 digest truncated to the AES-256 key size.
fn sha256_hex(data: &[u8]) -> Vec<u8> {
    Sha256::digest(data)
        .iter()
        .take(AES_BLOCK_SIZE)
        .fold(String::new(), |acc, byte| format!("{acc}{byte:02x}"))
        .into_bytes()
}

impl std::fmt::Debug for AesCbcCrypto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesCbcCrypto")
            .field("iv", &self.iv)
            .finish_non_exhaustive()
    }
}

impl CryptoProvider for AesCbcCrypto {
    /// Encrypt provided data.
    ///
    /// # Errors
    /// Returns [`PubNubError::Encryption`] if a random initialization vector
    /// can't be generated or the cipher rejects the data.
    fn encrypt(&self, data: Vec<u8>) -> Result<Vec<u8>, PubNubError> {
        let iv = self.encryption_iv()?;
        let prefix = match self.iv {
            AesCbcIv::Constant => 0,
            AesCbcIv::Random => AES_BLOCK_SIZE,
        };

        // Padding always adds between one and a full block.
        let mut buffer = vec![0u8; prefix + data.len() + AES_BLOCK_SIZE - data.len() % AES_BLOCK_SIZE];
        let encrypted_len = Encryptor::new(self.cipher_key.as_slice().into(), iv.as_slice().into())
            .encrypt_padded_b2b_mut::<Pkcs7>(&data, &mut buffer[prefix..])
            .map_err(|err| PubNubError::Encryption {
                details: err.to_string(),
            })?
            .len();

        buffer[..prefix].copy_from_slice(&iv[..prefix]);
        buffer.truncate(prefix + encrypted_len);

        Ok(buffer)
    }

    /// Decrypt provided data.
    ///
    /// # Errors
    /// Returns [`PubNubError::Decryption`] if the data has been encrypted with
    /// another key or is corrupted.
    fn decrypt(&self, data: Vec<u8>) -> Result<Vec<u8>, PubNubError> {
        let (iv, encrypted) = self.split_iv(&data)?;
        let mut buffer = vec![0u8; encrypted.len()];

        let decrypted_len = Decryptor::new(self.cipher_key.as_slice().into(), iv.into())
            .decrypt_padded_b2b_mut::<Pkcs7>(encrypted, &mut buffer)
            .map_err(|err| PubNubError::Decryption {
                details: err.to_string(),
            })?
            .len();
        buffer.truncate(decrypted_len);

        Ok(buffer)
    }
}
