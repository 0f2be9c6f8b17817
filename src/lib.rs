#![warn(missing_docs)]

//! # PubNub publish pipeline
//!
//! Publish messages to channels of the [`PubNub`] network.
//!
//! Each publish call takes a [`PublishRequest`], serializes the message with
//! [`serde`], optionally encrypts it, assembles query parameters, sends exactly
//! one request with the configured [`Transport`] and decodes the returned
//! timetoken into a [`PublishResult`]. Every failure is reported as a typed
//! [`PubNubError`].
//!
//! ## Example
//!
//! ```no_run
//! use pubnub_publish::{Keyset, PubNubClientBuilder, PublishRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PubNubClientBuilder::with_reqwest_transport()
//!     .with_keyset(Keyset {
//!         subscribe_key: "demo",
//!         publish_key: Some("demo"),
//!     })
//!     .with_user_id("user_id")
//!     .with_cipher_key("enigma")
//!     .build()?;
//!
//! let result = client
//!     .publish(PublishRequest {
//!         store: Some(false),
//!         ..PublishRequest::new("Hello, world!", "my_channel")
//!     })
//!     .await?;
//!
//! println!("Published at {}", result.timetoken);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! * `reqwest` - [`reqwest`] based transport (default)
//! * `blocking` - blocking transport and `publish_blocking` (default)
//! * `crypto` - AES-CBC message encryption (default)
//! * `full` - all of the above
//!
//! [`PubNub`]: https://www.pubnub.com/
//! [`serde`]: https://crates.io/crates/serde
//! [`reqwest`]: https://crates.io/crates/reqwest
//! [`Transport`]: crate::core::Transport
//! [`PubNubError`]: crate::core::PubNubError

#[doc(inline)]
pub use dx::{Keyset, PubNubClientBuilder, PubNubGenericClient, PublishRequest, PublishResult};

#[cfg(feature = "reqwest")]
#[doc(inline)]
pub use dx::PubNubClient;

pub mod core;
pub mod dx;
pub mod providers;
pub mod transport;
