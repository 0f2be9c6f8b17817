//! Serialization module
//!
//! This module provides a [`Serialize`] trait for the Pubnub protocol.
//!
//! The trait is implemented for every [`serde::Serialize`] type by the
//! [`serialization_serde`] provider, so most messages can be published as is.
//!
//! [`Serialize`]: trait.Serialize.html
//! [`serialization_serde`]: ../../providers/serialization_serde/index.html

use super::PubNubError;

/// Serialize values
///
/// This trait provides a [`serialize`] method for the Pubnub protocol.
///
/// The output has to be a syntactically valid JSON document because it is
/// sent to the [`PubNub API`] either inside the request path or as the
/// request body.
///
/// [`serialize`]: #tymethod.serialize
/// [`PubNub API`]: https://www.pubnub.com/docs
///
/// # Examples
/// ```
/// use pubnub_publish::core::Serialize;
///
/// let bytes = vec![1, 2, 3];
/// assert_eq!(bytes.serialize().unwrap(), b"[1,2,3]".to_vec());
/// ```
pub trait Serialize {
    /// Serialize the value
    ///
    /// # Errors
    /// Should return an [`PubNubError::Serialization`] if the value cannot be serialized.
    ///
    /// [`PubNubError::Serialization`]: ../error/enum.PubNubError.html#variant.Serialization
    fn serialize(self) -> Result<Vec<u8>, PubNubError>;
}
