//! # PubNub Developer Experience
//!
//! This module provides structures and methods to publish messages with the
//! [PubNub] realtime messaging service.
//! It is intended to be used by the [`pubnub_publish`] crate.
//!
//! [`pubnub_publish`]: ../index.html
//! [PubNub]: https://www.pubnub.com/

pub use publish::{PublishRequest, PublishResult};
pub mod publish;

#[cfg(feature = "reqwest")]
pub use pubnub_client::PubNubClient;
pub use pubnub_client::{Keyset, PubNubClientBuilder, PubNubGenericClient};
pub mod pubnub_client;
