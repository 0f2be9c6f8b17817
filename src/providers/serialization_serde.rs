//! Serde implementation for PubNub [`Serialize`] trait.
//!
//! This module provides a `serde` serializer for the Pubnub protocol.
//!
//! # Examples
//! ```
//! use pubnub_publish::core::Serialize as _;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Foo {
//!    bar: String,
//! }
//!
//! let foo = Foo { bar: "baz".to_string() };
//! assert_eq!(foo.serialize().unwrap(), b"{\"bar\":\"baz\"}".to_vec());
//! ```
//!
//! [`Serialize`]: ../../core/trait.Serialize.html

impl<S> crate::core::Serialize for S
where
    S: serde::Serialize,
{
    fn serialize(self) -> Result<Vec<u8>, crate::core::PubNubError> {
        serde_json::to_vec(&self).map_err(|e| crate::core::PubNubError::Serialization {
            details: e.to_string(),
        })
    }
}
