//! Deserialization of Rust data structures.
//!
//! This module contains the `Deserializer` trait which is used to implement
//! deserialization of Rust data structures.

use super::PubNubError;

/// Trait for deserializing Rust data structures.
///
/// This trait is used to implement deserialization of Rust data structures.
/// It is used by the [`dx`] modules to deserialize the data returned by the
/// PubNub API.
///
/// To implement this trait, you must provide a `deserialize` method that
/// takes a `&[u8]` and returns a `Result<T, PubNubError>`.
///
/// More information about the response of the PubNub API can be found in the
/// [PubNub API Reference](https://www.pubnub.com/docs).
///
/// # Examples
/// ```
/// use pubnub_publish::core::{Deserializer, PubNubError};
///
/// struct MyDeserializer;
///
/// impl Deserializer for MyDeserializer {
///    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, PubNubError>
///    where
///        T: for<'de> serde::Deserialize<'de>,
///    {
///         // ...
///         # unimplemented!()
///    }
/// }
/// ```
///
/// [`dx`]: ../dx/index.html
pub trait Deserializer: Send + Sync {
    /// Deserialize a `&[u8]` into a `Result<T, PubNubError>`.
    ///
    /// # Errors
    ///
    /// This method should return [`PubNubError::Deserialization`] if the
    /// deserialization fails.
    ///
    /// [`PubNubError::Deserialization`]: ../enum.PubNubError.html#variant.Deserialization
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, PubNubError>
    where
        T: for<'de> serde::Deserialize<'de>;
}
