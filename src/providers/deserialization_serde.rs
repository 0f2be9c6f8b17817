//! Serde implementation for PubNub [`Deserializer`] trait.
//!
//! This module provides a `serde` deserializer for the Pubnub protocol.
//!
//! [`Deserializer`]: ../../core/trait.Deserializer.html

use crate::core::{Deserializer, PubNubError};

/// Serde implementation for PubNub [`Deserializer`] trait.
///
/// This struct implements the [`Deserializer`] trait for the [`serde`] crate.
/// It is used by the [`dx`] modules to deserialize the data returned by the
/// PubNub API.
///
/// [`Deserializer`]: ../../core/trait.Deserializer.html
/// [`serde`]: https://crates.io/crates/serde
/// [`dx`]: ../../dx/index.html
#[derive(Debug, Clone, Copy, Default)]
pub struct DeserializerSerde;

impl Deserializer for DeserializerSerde {
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, PubNubError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        serde_json::from_slice(bytes).map_err(|e| PubNubError::Deserialization {
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Foo {
        bar: String,
    }

    #[test]
    fn deserialize() {
        let sut = DeserializerSerde;

        let result: Foo = sut.deserialize(&Vec::from("{\"bar\":\"baz\"}")).unwrap();

        assert_eq!(
            result,
            Foo {
                bar: "baz".to_string()
            }
        );
    }

    #[test]
    fn return_err_for_invalid_json() {
        let sut = DeserializerSerde;

        let result: Result<Foo, _> = sut.deserialize(b"{\"bar\":");

        assert!(matches!(result, Err(PubNubError::Deserialization { .. })));
    }
}
