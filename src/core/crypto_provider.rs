//! # Crypto provider module
//!
//! This module contains the [`CryptoProvider`] trait, which is used to
//! implement a module that can be used to configure [`PubNubClientInstance`] or
//! for manual data encryption and decryption.
//!
//! [`PubNubClientInstance`]: crate::dx::pubnub_client::PubNubClientInstance

use crate::core::PubNubError;
use std::fmt::Debug;

/// Crypto provider trait.
///
/// The publish pipeline treats the provider as an opaque
/// `encrypt(plaintext) -> ciphertext` capability. Providers are shared between
/// concurrent calls, so they shouldn't keep mutable state.
///
/// # Examples
/// ```
/// use pubnub_publish::core::{CryptoProvider, PubNubError};
///
/// #[derive(Debug)]
/// struct MyCryptor;
///
/// impl CryptoProvider for MyCryptor {
///     fn encrypt(&self, data: Vec<u8>) -> Result<Vec<u8>, PubNubError> {
///         // Encrypt provided data here
///         Ok(data)
///     }
///
///     fn decrypt(&self, data: Vec<u8>) -> Result<Vec<u8>, PubNubError> {
///         // Decrypt provided data here
///         Ok(data)
///     }
/// }
/// ```
pub trait CryptoProvider: Debug + Send + Sync {
    /// Encrypt provided data.
    ///
    /// # Errors
    /// Should return an [`PubNubError::Encryption`] if provided data can't be
    /// _encrypted_ or underlying cryptor misconfigured.
    fn encrypt(&self, data: Vec<u8>) -> Result<Vec<u8>, PubNubError>;

    /// Decrypt provided data.
    ///
    /// # Errors
    /// Should return an [`PubNubError::Decryption`] if provided data can't be
    /// _decrypted_ or underlying cryptor misconfigured.
    fn decrypt(&self, data: Vec<u8>) -> Result<Vec<u8>, PubNubError>;
}
