//! # Providers module
//!
//! This module contains the Providers that can be used by [`PubNubClient`].
//! It is intended to be used by the [`pubnub_publish`] crate.
//!
//! [`PubNubClient`]: ../dx/pubnub_client/type.PubNubClient.html
//! [`pubnub_publish`]: ../index.html

pub mod serialization_serde;

pub mod deserialization_serde;

#[cfg(feature = "crypto")]
pub mod crypto_aescbc;
