//! # Transport Providers Module
//!
//! This module contains the Transport Providers that can be used by [`PubNubClient`].
//! It is intended to be used by the [`pubnub_publish`] crate.
//!
//! [`PubNubClient`]: crate::dx::pubnub_client::PubNubClient
//! [`pubnub_publish`]: ../index.html

#[cfg(feature = "reqwest")]
pub use self::reqwest::TransportReqwest;
#[cfg(feature = "reqwest")]
pub mod reqwest;

pub mod middleware;
