//! # PubNub Core
//!
//! Core functionality of the PubNub publish pipeline.
//!
//! The `core` module contains the traits and types shared by the publish
//! operation and the transport / serialization / crypto providers. It is
//! intended to be used by the [`pubnub_publish`] crate.
//!
//! [`pubnub_publish`]: ../index.html

#[doc(inline)]
pub use error::PubNubError;
pub mod error;

#[doc(inline)]
pub use error_response::APIErrorBody;
pub mod error_response;

#[doc(inline)]
pub use transport::Transport;
pub mod transport;

#[cfg(feature = "blocking")]
#[doc(inline)]
pub use transport::blocking;

#[doc(inline)]
pub use transport_request::{TransportMethod, TransportRequest};
pub mod transport_request;

#[doc(inline)]
pub use transport_response::TransportResponse;
pub mod transport_response;

#[doc(inline)]
pub use serialize::Serialize;
pub mod serialize;

#[doc(inline)]
pub use deserializer::Deserializer;
pub mod deserializer;

#[doc(inline)]
pub use crypto_provider::CryptoProvider;
pub mod crypto_provider;

pub(crate) mod utils;
